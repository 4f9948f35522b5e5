//! Extension allow-list.
//!
//! Only the extensions listed here are ever served. Lookups for anything
//! else return `None`, which the resolver turns into 403 Forbidden.

const ALLOWED: &[(&str, &str)] = &[
    ("", "text/html"),
    ("html", "text/html"),
    ("css", "text/css"),
    ("js", "application/javascript"),
];

/// Content type for a lowercased extension (without the dot).
pub fn content_type_for(extension: &str) -> Option<&'static str> {
    ALLOWED
        .iter()
        .find(|(ext, _)| *ext == extension)
        .map(|(_, content_type)| *content_type)
}

/// Extension of the final path segment: text after its last `.`, lowercased.
///
/// Returns an empty string when the final segment has no dot.
pub fn extension_of(path: &str) -> String {
    let file_name = path.rsplit('/').next().unwrap_or(path);
    match file_name.rsplit_once('.') {
        Some((_, ext)) => ext.to_ascii_lowercase(),
        None => String::new(),
    }
}
