//! HTTP response handlers.

use crate::asset::AssetError;
use crate::utils::mime::{self, types::PLAIN};
use anyhow::Result;
use tiny_http::{Header, Request, Response, StatusCode};

/// Respond with compiled asset content.
///
/// tiny_http drops the body itself for `HEAD` requests.
pub fn respond_asset(request: Request, filename: &str, content: String) -> Result<()> {
    send_body(request, 200, mime::for_asset(filename), content.into_bytes())
}

/// Map a fetch failure to an error response.
pub fn respond_asset_error(request: Request, error: &AssetError) -> Result<()> {
    let mut body = error.to_string();
    if let Some(source) = std::error::Error::source(error) {
        body.push_str(&format!(": {source}"));
    }
    send_body(request, status_for(error), Some(PLAIN), body.into_bytes())
}

/// Respond with 404 for paths outside the asset route.
pub fn respond_not_found(request: Request) -> Result<()> {
    send_body(request, 404, Some(PLAIN), b"404 Not Found".to_vec())
}

/// Respond with 503 Service Unavailable (server shutting down).
pub fn respond_unavailable(request: Request) -> Result<()> {
    send_body(request, 503, Some(PLAIN), b"503 Service Unavailable".to_vec())
}

/// Status code for a failed fetch.
pub const fn status_for(error: &AssetError) -> u16 {
    match error {
        AssetError::Unhandable { .. } => 404,
        AssetError::SourceRead { .. } | AssetError::Compilation { .. } => 500,
    }
}

fn send_body(
    request: Request,
    status: u16,
    content_type: Option<&'static str>,
    body: Vec<u8>,
) -> Result<()> {
    let mut response = Response::from_data(body).with_status_code(StatusCode(status));
    if let Some(content_type) = content_type {
        response = response.with_header(make_header("Content-Type", content_type));
    }
    request.respond(response)?;
    Ok(())
}

fn make_header(key: &'static str, value: &'static str) -> Header {
    Header::from_bytes(key, value).unwrap()
}
