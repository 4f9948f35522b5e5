use crate::http::request::{Method, ParsedRequest};

/// Bytes read from a connection before parsing. Anything past this is ignored.
pub const READ_BUFFER_SIZE: usize = 8192;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Nothing was read; the peer closed the connection.
    Empty,
    /// The request line is missing or does not have exactly three tokens.
    MalformedRequestLine,
}

/// Parses the request line out of the first buffer read from a connection.
///
/// The buffer is decoded as (lossy) UTF-8 and split on CRLF with empty
/// segments dropped; the first remaining segment must be
/// `METHOD SP PATH SP VERSION`. Headers and anything after them are ignored.
pub fn parse_request_line(buf: &[u8]) -> Result<ParsedRequest, ParseError> {
    if buf.is_empty() {
        return Err(ParseError::Empty);
    }

    let text = String::from_utf8_lossy(buf);
    let request_line = text
        .split("\r\n")
        .find(|segment| !segment.is_empty())
        .ok_or(ParseError::MalformedRequestLine)?;

    // Single spaces only: "GET  / HTTP/1.1" yields an empty token and fails.
    let parts: Vec<&str> = request_line.split(' ').collect();
    let [method, path, version] = parts.as_slice() else {
        return Err(ParseError::MalformedRequestLine);
    };

    Ok(ParsedRequest {
        method: Method::from_token(method),
        raw_path: path.to_string(),
        version: version.to_string(),
    })
}
