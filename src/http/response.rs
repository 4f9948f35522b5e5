/// HTTP status codes produced by the server.
///
/// - `Ok` (200): File served
/// - `BadRequest` (400): Malformed request line
/// - `Forbidden` (403): Traversal attempt or extension outside the allow-list
/// - `NotFound` (404): No regular file at the resolved path
/// - `MethodNotAllowed` (405): Anything other than GET
/// - `InternalServerError` (500): File resolved but could not be read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 200 OK
    Ok,
    /// 400 Bad Request
    BadRequest,
    /// 403 Forbidden
    Forbidden,
    /// 404 Not Found
    NotFound,
    /// 405 Method Not Allowed
    MethodNotAllowed,
    /// 500 Internal Server Error
    InternalServerError,
}

impl StatusCode {
    /// Returns the numeric HTTP status code.
    ///
    /// # Example
    ///
    /// ```
    /// # use staticd::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.as_u16(), 200);
    /// assert_eq!(StatusCode::Forbidden.as_u16(), 403);
    /// ```
    pub fn as_u16(&self) -> u16 {
        match self {
            StatusCode::Ok => 200,
            StatusCode::BadRequest => 400,
            StatusCode::Forbidden => 403,
            StatusCode::NotFound => 404,
            StatusCode::MethodNotAllowed => 405,
            StatusCode::InternalServerError => 500,
        }
    }

    /// Returns the standard HTTP reason phrase for this status code.
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::BadRequest => "Bad Request",
            StatusCode::Forbidden => "Forbidden",
            StatusCode::NotFound => "Not Found",
            StatusCode::MethodNotAllowed => "Method Not Allowed",
            StatusCode::InternalServerError => "Internal Server Error",
        }
    }
}

/// Everything needed to serialize one response.
///
/// Success and error responses share this type so they go through a single
/// serialization path in [`crate::http::writer`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseSpec {
    pub status: StatusCode,
    pub content_type: &'static str,
    pub body: Vec<u8>,
}

impl ResponseSpec {
    /// A 200 OK carrying file contents.
    pub fn ok(content_type: &'static str, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status: StatusCode::Ok,
            content_type,
            body: body.into(),
        }
    }

    /// An HTML error page for `status`.
    pub fn error(status: StatusCode, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            content_type: "text/html",
            body: body.into(),
        }
    }

    pub fn reason_phrase(&self) -> &'static str {
        self.status.reason_phrase()
    }
}
