//! Request path validation and resolution
//!
//! Turns the raw path token of a request into a file under the document
//! root plus its content type, or rejects it.

use std::path::{Path, PathBuf};

use percent_encoding::percent_decode_str;

use crate::http::mime;
use crate::http::response::StatusCode;

/// A request path that passed every check and names an existing file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTarget {
    /// Location of the file on disk (document root joined with the request path)
    pub path: PathBuf,
    /// Content type chosen from the extension allow-list
    pub content_type: &'static str,
}

/// Why a request path was rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// Decoded path contains `..` anywhere
    Traversal,
    /// Extension is not on the allow-list
    DisallowedExtension(String),
    /// No regular file at the resolved location
    NotFound,
}

impl ResolveError {
    /// Status code sent back for this rejection
    pub fn status(&self) -> StatusCode {
        match self {
            ResolveError::Traversal | ResolveError::DisallowedExtension(_) => StatusCode::Forbidden,
            ResolveError::NotFound => StatusCode::NotFound,
        }
    }
}

/// Resolves request paths against a fixed, read-only document root
#[derive(Debug, Clone)]
pub struct PathResolver {
    document_root: PathBuf,
}

impl PathResolver {
    pub fn new(document_root: impl Into<PathBuf>) -> Self {
        Self {
            document_root: document_root.into(),
        }
    }

    pub fn document_root(&self) -> &Path {
        &self.document_root
    }

    /// Runs the checks that need no filesystem access.
    ///
    /// Returns the decoded path and its content type. Steps, each
    /// short-circuiting:
    /// 1. `/` becomes `/index.html`
    /// 2. Percent-decode
    /// 3. Reject any `..` substring (403)
    /// 4. Lowercased extension of the final segment
    /// 5. Allow-list lookup (403 when absent)
    pub fn validate(&self, raw_path: &str) -> Result<(String, &'static str), ResolveError> {
        let raw_path = if raw_path == "/" { "/index.html" } else { raw_path };

        let decoded = percent_decode_str(raw_path)
            .decode_utf8_lossy()
            .into_owned();

        // Substring match, not segment-aware: "/a..b.html" is rejected too.
        if decoded.contains("..") {
            return Err(ResolveError::Traversal);
        }

        let extension = mime::extension_of(&decoded);
        let content_type = mime::content_type_for(&extension)
            .ok_or(ResolveError::DisallowedExtension(extension))?;

        Ok((decoded, content_type))
    }

    /// Validates `raw_path` and checks that a regular file exists for it.
    pub async fn resolve(&self, raw_path: &str) -> Result<ResolvedTarget, ResolveError> {
        let (decoded, content_type) = self.validate(raw_path)?;

        let path = self.document_root.join(decoded.trim_start_matches('/'));

        match tokio::fs::metadata(&path).await {
            Ok(meta) if meta.is_file() => Ok(ResolvedTarget { path, content_type }),
            _ => Err(ResolveError::NotFound),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_maps_to_index() {
        let resolver = PathResolver::new("webroot");
        let (path, content_type) = resolver.validate("/").unwrap();
        assert_eq!(path, "/index.html");
        assert_eq!(content_type, "text/html");
    }

    #[test]
    fn encoded_dots_are_caught_after_decoding() {
        let resolver = PathResolver::new("webroot");
        assert_eq!(resolver.validate("/%2e%2e/secret.html"), Err(ResolveError::Traversal));
    }
}
