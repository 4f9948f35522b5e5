//! Static file lookup under the document root
//!
//! This module validates request paths against the document root and
//! builds error page bodies.

pub mod error_page;
pub mod resolver;

pub use resolver::{PathResolver, ResolveError, ResolvedTarget};
