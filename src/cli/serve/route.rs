//! URL → requested asset filename.

use regex::Regex;
use std::sync::OnceLock;

/// Extract the filename from `/assets/<type>/<filename>`.
///
/// The query string is dropped and percent-encoding decoded. Returns `None`
/// for other paths and for filenames that could escape the asset root.
pub fn asset_filename(url: &str) -> Option<String> {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| Regex::new(r"^/assets/[A-Za-z0-9_]+/(?<filename>.+)$").unwrap());

    let path = decode_path(url)?;
    let filename = re.captures(&path)?.name("filename")?.as_str();
    is_safe_filename(filename).then(|| filename.to_string())
}

/// Decode percent-encoding and strip the query string.
fn decode_path(url: &str) -> Option<String> {
    use percent_encoding::percent_decode_str;

    let path = url.split('?').next().unwrap_or(url);
    percent_decode_str(path)
        .decode_utf8()
        .ok()
        .map(std::borrow::Cow::into_owned)
}

/// Relative, no `..` segments, no backslashes.
fn is_safe_filename(filename: &str) -> bool {
    !filename.starts_with('/')
        && !filename.contains('\\')
        && !filename.contains('\0')
        && filename.split('/').all(|segment| segment != "..")
}
