//! Error page bodies
//!
//! If `error.html` exists at the document root it is used as a template:
//! every occurrence of the configured placeholder is replaced with the
//! numeric status code. Otherwise a minimal page is generated.

use std::path::Path;

use crate::http::response::StatusCode;

pub const ERROR_PAGE_FILE: &str = "error.html";

/// Body for an error response with `status`.
pub async fn render(document_root: &Path, placeholder: &str, status: StatusCode) -> Vec<u8> {
    match tokio::fs::read(document_root.join(ERROR_PAGE_FILE)).await {
        Ok(template) => {
            let template = String::from_utf8_lossy(&template);
            fill_template(&template, placeholder, status).into_bytes()
        }
        Err(_) => default_page(status).into_bytes(),
    }
}

pub fn fill_template(template: &str, placeholder: &str, status: StatusCode) -> String {
    if placeholder.is_empty() {
        return template.to_string();
    }
    template.replace(placeholder, &status.as_u16().to_string())
}

pub fn default_page(status: StatusCode) -> String {
    let code = status.as_u16();
    let reason = status.reason_phrase();
    format!(
        "<html><head><title>{code} {reason}</title></head><body><h1>{code} {reason}</h1></body></html>"
    )
}
