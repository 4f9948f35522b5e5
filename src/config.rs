use std::path::PathBuf;

use anyhow::Context;
use serde::Deserialize;

/// Env var naming an optional YAML configuration file.
pub const CONFIG_ENV: &str = "STATICD_CONFIG";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub static_files: StaticFilesConfig,
    pub access_log: AccessLogConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub listen_addr: String,
}

/// Where files are served from and how error pages are customized.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StaticFilesConfig {
    pub document_root: PathBuf,
    /// Token in `error.html` replaced by the numeric status code.
    pub error_page_placeholder: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AccessLogConfig {
    /// `None` disables the request log file.
    pub path: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:8080".to_string(),
        }
    }
}

impl Default for StaticFilesConfig {
    fn default() -> Self {
        Self {
            document_root: PathBuf::from("webroot"),
            error_page_placeholder: "{{status_code}}".to_string(),
        }
    }
}

impl Default for AccessLogConfig {
    fn default() -> Self {
        Self {
            path: Some(PathBuf::from("requests.log")),
        }
    }
}

impl Config {
    /// Loads the YAML file named by `STATICD_CONFIG` (if set), then applies
    /// the `LISTEN`, `DOCUMENT_ROOT` and `ACCESS_LOG` overrides.
    pub fn load() -> anyhow::Result<Self> {
        let mut cfg = match std::env::var(CONFIG_ENV) {
            Ok(path) => {
                let raw = std::fs::read_to_string(&path)
                    .with_context(|| format!("failed to read config file {}", path))?;
                Self::from_yaml(&raw)
                    .with_context(|| format!("invalid config file {}", path))?
            }
            Err(_) => Self::default(),
        };

        if let Ok(addr) = std::env::var("LISTEN") {
            cfg.server.listen_addr = addr;
        }
        if let Ok(root) = std::env::var("DOCUMENT_ROOT") {
            cfg.static_files.document_root = PathBuf::from(root);
        }
        if let Ok(log) = std::env::var("ACCESS_LOG") {
            // Empty value turns the file sink off
            cfg.access_log.path = if log.is_empty() {
                None
            } else {
                Some(PathBuf::from(log))
            };
        }

        Ok(cfg)
    }

    pub fn from_yaml(raw: &str) -> anyhow::Result<Self> {
        Ok(serde_yaml::from_str(raw)?)
    }
}
