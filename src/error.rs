//! Error handling for report loading and rendering.
//!
//! Only retrieval, configuration and output can fail. Parsing, classification
//! and card composition are total and report problems as warnings instead.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CardsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Report not found at path: {path}")]
    ReportNotFound { path: PathBuf },

    #[error("Report {source_name} is not readable text: {reason}")]
    NonTextReport { source_name: String, reason: String },

    #[error("Request to {url} failed: {reason}")]
    Http { url: String, reason: String },

    #[error("Request to {url} returned HTTP {status}")]
    HttpStatus { url: String, status: u16 },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("No report matching {pattern} was found")]
    NoReportDiscovered { pattern: String },

    #[error("Loading interrupted: {reason}")]
    Interrupted { reason: String },
}

impl CardsError {
    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create an interruption error
    pub fn interrupted(reason: impl Into<String>) -> Self {
        Self::Interrupted {
            reason: reason.into(),
        }
    }

    /// Whether the failure happened while retrieving the report text
    pub fn is_retrieval(&self) -> bool {
        matches!(
            self,
            Self::Io(_)
                | Self::ReportNotFound { .. }
                | Self::NonTextReport { .. }
                | Self::Http { .. }
                | Self::HttpStatus { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, CardsError>;
