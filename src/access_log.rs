//! Per-request access log
//!
//! One JSON line per request that gets past parsing. Writing is best-effort:
//! failures are reported through `tracing` and never reach the caller.

use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::fs::{File, OpenOptions};
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;

use crate::http::request::ParsedRequest;

/// A single access log entry
#[derive(Debug, Clone, Serialize)]
pub struct RequestLogRecord {
    pub timestamp: DateTime<Utc>,
    pub remote: SocketAddr,
    pub method: String,
    pub path: String,
    pub version: String,
}

impl RequestLogRecord {
    pub fn new(remote: SocketAddr, request: &ParsedRequest) -> Self {
        Self {
            timestamp: Utc::now(),
            remote,
            method: request.method.to_string(),
            path: request.raw_path.clone(),
            version: request.version.clone(),
        }
    }

    /// Serializes the record as one newline-terminated JSON line.
    pub fn to_line(&self) -> anyhow::Result<String> {
        let mut line = serde_json::to_string(self)?;
        line.push('\n');
        Ok(line)
    }
}

/// Shared, append-only sink for [`RequestLogRecord`]s
#[derive(Debug, Clone, Default)]
pub struct AccessLog {
    file: Option<Arc<Mutex<File>>>,
}

impl AccessLog {
    /// Opens (or creates) `path` in append mode.
    pub async fn open(path: &Path) -> anyhow::Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .await
            .with_context(|| format!("failed to open access log {}", path.display()))?;

        Ok(Self {
            file: Some(Arc::new(Mutex::new(file))),
        })
    }

    /// A sink that only emits `tracing` events.
    pub fn disabled() -> Self {
        Self { file: None }
    }

    pub async fn record(&self, record: &RequestLogRecord) {
        tracing::info!(
            peer = %record.remote,
            method = %record.method,
            path = %record.path,
            version = %record.version,
            "Request"
        );

        if let Err(e) = self.append(record).await {
            tracing::warn!(error = %e, "Failed to write access log record");
        }
    }

    async fn append(&self, record: &RequestLogRecord) -> anyhow::Result<()> {
        let Some(file) = &self.file else {
            return Ok(());
        };

        let line = record.to_line()?;
        let mut file = file.lock().await;
        file.write_all(line.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }
}
