use staticd::http::parser::{parse_request_line, ParseError};
use staticd::http::request::Method;

#[test]
fn test_parse_simple_get_request() {
    let req = b"GET / HTTP/1.1\r\nHost: example.com\r\n\r\n";
    let parsed = parse_request_line(req).unwrap();

    assert_eq!(parsed.method, Method::Get);
    assert_eq!(parsed.raw_path, "/");
    assert_eq!(parsed.version, "HTTP/1.1");
}

#[test]
fn test_parse_lowercase_method_is_normalized() {
    let parsed = parse_request_line(b"get /index.html HTTP/1.1\r\n\r\n").unwrap();
    assert_eq!(parsed.method, Method::Get);
    assert!(parsed.method.is_get());
}

#[test]
fn test_parse_other_method_is_kept() {
    let parsed = parse_request_line(b"post /index.html HTTP/1.1\r\n\r\n").unwrap();
    assert_eq!(parsed.method, Method::Other("POST".to_string()));
    assert_eq!(parsed.method.to_string(), "POST");
    assert!(!parsed.method.is_get());
}

#[test]
fn test_parse_path_is_not_decoded() {
    let parsed = parse_request_line(b"GET /my%20page.html?x=1 HTTP/1.1\r\n").unwrap();
    assert_eq!(parsed.raw_path, "/my%20page.html?x=1");
}

#[test]
fn test_parse_request_line_without_crlf() {
    let parsed = parse_request_line(b"GET /app.js HTTP/1.0").unwrap();
    assert_eq!(parsed.raw_path, "/app.js");
    assert_eq!(parsed.version, "HTTP/1.0");
}

#[test]
fn test_parse_empty_buffer() {
    assert_eq!(parse_request_line(b""), Err(ParseError::Empty));
}

#[test]
fn test_parse_only_line_breaks_is_malformed() {
    assert_eq!(
        parse_request_line(b"\r\n\r\n"),
        Err(ParseError::MalformedRequestLine)
    );
}

#[test]
fn test_parse_two_tokens_is_malformed() {
    assert_eq!(
        parse_request_line(b"GET /\r\n\r\n"),
        Err(ParseError::MalformedRequestLine)
    );
}

#[test]
fn test_parse_four_tokens_is_malformed() {
    assert_eq!(
        parse_request_line(b"GET / HTTP/1.1 extra\r\n\r\n"),
        Err(ParseError::MalformedRequestLine)
    );
}

#[test]
fn test_parse_double_space_is_malformed() {
    assert_eq!(
        parse_request_line(b"GET  / HTTP/1.1\r\n\r\n"),
        Err(ParseError::MalformedRequestLine)
    );
}

#[test]
fn test_parse_invalid_utf8_does_not_panic() {
    let parsed = parse_request_line(b"GET /\xff.html HTTP/1.1\r\n\r\n").unwrap();
    assert_eq!(parsed.raw_path, "/\u{fffd}.html");
}
