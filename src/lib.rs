//! staticd - Minimal static file server
//!
//! Serves files from a document root over a small, GET-only subset of
//! HTTP/1.1. One task per connection, one request per connection.

pub mod access_log;
pub mod config;
pub mod http;
pub mod server;
pub mod static_files;
