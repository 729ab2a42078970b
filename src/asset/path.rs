//! Requested filename → physical source path.

use std::path::{Path, PathBuf};

/// Split a filename into `(base, extension)` at the last `.` of its final
/// path segment.
///
/// A segment without a dot has an empty extension and the whole filename
/// as its base.
///
/// ```ignore
/// split_extension("foo.bar.js")  == ("foo.bar", "js")
/// split_extension("v1.2/app")    == ("v1.2/app", "")
/// ```
pub fn split_extension(filename: &str) -> (&str, &str) {
    let segment_start = filename.rfind('/').map_or(0, |i| i + 1);
    match filename[segment_start..].rfind('.') {
        Some(dot) => {
            let dot = segment_start + dot;
            (&filename[..dot], &filename[dot + 1..])
        }
        None => (filename, ""),
    }
}

/// Whether `filename` requests the given extension (ASCII case-insensitive).
pub fn has_extension(filename: &str, ext: &str) -> bool {
    let (_, requested) = split_extension(filename);
    !requested.is_empty() && requested.eq_ignore_ascii_case(ext)
}

/// Resolve the physical path of the `source_ext` candidate for `filename`.
///
/// Only the final extension is substituted: `foo.bar.js` with `coffee`
/// becomes `<root>/<type_dir>/foo.bar.coffee`.
pub fn resolve_path(filename: &str, source_ext: &str, type_dir: &str, root: &Path) -> PathBuf {
    let (base, _) = split_extension(filename);
    root.join(type_dir).join(format!("{base}.{source_ext}"))
}
