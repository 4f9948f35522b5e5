//! HTTP protocol subset.
//!
//! Just enough HTTP/1.1 to serve static files: the request line is parsed,
//! headers are ignored, and every response closes the connection.
//!
//! - **`connection`**: Per-connection state machine
//! - **`parser`**: Extracts the request line from the first read buffer
//! - **`request`**: `ParsedRequest` and `Method`
//! - **`response`**: `ResponseSpec` and `StatusCode`
//! - **`writer`**: Serializes and writes responses
//! - **`mime`**: Extension allow-list
//!
//! # Connection State Machine
//!
//! ```text
//!        ┌─────────────┐
//!        │   Reading   │ ← One read of up to 8 KiB
//!        └──────┬──────┘      (0 bytes → Closed, nothing sent)
//!               ▼
//!        ┌─────────────┐
//!        │   Parsing   │ ← 400 on a malformed request line
//!        └──────┬──────┘
//!               │ access log record, then 405 unless GET
//!               ▼
//!        ┌─────────────┐
//!        │ Validating  │ ← 403 / 404 from the path resolver
//!        └──────┬──────┘
//!               ▼
//!        ┌─────────────┐
//!        │ Responding  │ ← 200 with the file body
//!        └──────┬──────┘
//!               ▼
//!             Closed
//! ```

pub mod connection;
pub mod mime;
pub mod parser;
pub mod request;
pub mod response;
pub mod writer;
