//! Content-type inference for served assets.
//!
//! Only the two asset families the pipeline produces get a type; anything
//! else is sent without a `Content-Type` header.

/// MIME type constants.
pub mod types {
    pub const CSS: &str = "text/css";
    pub const JAVASCRIPT: &str = "application/javascript";
    pub const PLAIN: &str = "text/plain; charset=utf-8";
}

/// Guess the content type of a requested asset filename.
pub fn for_asset(filename: &str) -> Option<&'static str> {
    if filename.ends_with(".js") {
        Some(types::JAVASCRIPT)
    } else if filename.ends_with(".css") {
        Some(types::CSS)
    } else {
        None
    }
}
