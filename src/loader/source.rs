//! Report sources
//!
//! A report is read either from a local file or from an HTTP(S) URL. When
//! no source is given the newest generated report in the drafts directory
//! is used.

use crate::config::{CardsConfig, HttpConfig};
use crate::error::{CardsError, Result};
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

/// Location of a report
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportSource {
    Path(PathBuf),
    Url(String),
}

impl ReportSource {
    /// Interpret a command-line argument as a URL or a file path
    pub fn from_arg(arg: &str) -> Self {
        let lower = arg.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            ReportSource::Url(arg.to_string())
        } else {
            ReportSource::Path(PathBuf::from(arg))
        }
    }

    /// Newest report in the configured drafts directory
    ///
    /// Report names carry their generation date, so the lexicographically
    /// greatest match is the most recent one.
    pub fn discover(config: &CardsConfig) -> Result<Self> {
        let pattern = config.report_glob();
        let entries = glob::glob(&pattern)
            .map_err(|e| CardsError::configuration(format!("Invalid report pattern: {}", e)))?;

        let newest = entries
            .filter_map(|entry| entry.ok())
            .filter(|path| path.is_file())
            .max_by(|a, b| a.file_name().cmp(&b.file_name()));

        match newest {
            Some(path) => {
                debug!("Discovered report {}", path.display());
                Ok(ReportSource::Path(path))
            }
            None => Err(CardsError::NoReportDiscovered { pattern }),
        }
    }

    /// Read the full report text
    pub async fn fetch(&self, http: &HttpConfig) -> Result<String> {
        match self {
            ReportSource::Path(path) => read_file(path).await,
            ReportSource::Url(url) => fetch_url(url, http).await,
        }
    }
}

impl fmt::Display for ReportSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportSource::Path(path) => write!(f, "{}", path.display()),
            ReportSource::Url(url) => f.write_str(url),
        }
    }
}

async fn read_file(path: &Path) -> Result<String> {
    let bytes = match tokio::fs::read(path).await {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(CardsError::ReportNotFound {
                path: path.to_path_buf(),
            });
        }
        Err(e) => return Err(CardsError::Io(e)),
    };

    String::from_utf8(bytes).map_err(|e| CardsError::NonTextReport {
        source_name: path.display().to_string(),
        reason: e.to_string(),
    })
}

async fn fetch_url(url: &str, http: &HttpConfig) -> Result<String> {
    let mut builder = reqwest::Client::builder().user_agent(http.user_agent.as_str());
    if let Some(secs) = http.timeout_secs {
        builder = builder.timeout(Duration::from_secs(secs));
    }
    let client = builder.build().map_err(|e| CardsError::Http {
        url: url.to_string(),
        reason: e.to_string(),
    })?;

    let response = client.get(url).send().await.map_err(|e| CardsError::Http {
        url: url.to_string(),
        reason: if e.is_timeout() {
            format!("request timeout: {}", e)
        } else if e.is_connect() {
            format!("connection failed: {}", e)
        } else {
            e.to_string()
        },
    })?;

    let status = response.status();
    if !status.is_success() {
        return Err(CardsError::HttpStatus {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    if let Some(content_type) = response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
    {
        if !is_text_content_type(content_type) {
            return Err(CardsError::NonTextReport {
                source_name: url.to_string(),
                reason: format!("unexpected content type {}", content_type),
            });
        }
    }

    let bytes = response.bytes().await.map_err(|e| CardsError::Http {
        url: url.to_string(),
        reason: format!("failed to read response body: {}", e),
    })?;

    String::from_utf8(bytes.to_vec()).map_err(|e| CardsError::NonTextReport {
        source_name: url.to_string(),
        reason: e.to_string(),
    })
}

/// Whether a response content type can carry a markdown report
pub fn is_text_content_type(content_type: &str) -> bool {
    let mime = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    mime.starts_with("text/") || mime == "application/octet-stream" || mime.ends_with("markdown")
}
