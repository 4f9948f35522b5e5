use std::fmt;

/// HTTP request method.
///
/// Only `GET` is served. Every other token is kept verbatim (uppercased) so
/// it can be logged and answered with 405 Method Not Allowed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Method {
    /// GET - Retrieve a resource
    Get,
    /// Any other method token, uppercased
    Other(String),
}

impl Method {
    /// Parses a method token, normalizing case.
    ///
    /// # Example
    ///
    /// ```
    /// # use staticd::http::request::Method;
    /// assert_eq!(Method::from_token("get"), Method::Get);
    /// assert_eq!(Method::from_token("post"), Method::Other("POST".to_string()));
    /// ```
    pub fn from_token(s: &str) -> Self {
        let upper = s.to_ascii_uppercase();
        match upper.as_str() {
            "GET" => Method::Get,
            _ => Method::Other(upper),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Method::Get => "GET",
            Method::Other(m) => m,
        }
    }

    pub fn is_get(&self) -> bool {
        matches!(self, Method::Get)
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The request line of an incoming request.
///
/// Built only from a request line with exactly three tokens; never mutated
/// afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedRequest {
    /// The HTTP method (case-normalized)
    pub method: Method,
    /// The raw path token, still percent-encoded (e.g. "/my%20page.html")
    pub raw_path: String,
    /// HTTP version token (typically "HTTP/1.1")
    pub version: String,
}
