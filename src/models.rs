//! Core data structures for parsed reports.
//!
//! Defines the per-instrument record recovered from a report block, the
//! report header, and the warnings collected while scanning.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// One instrument block recovered from a report
///
/// Numeric fields default to zero and text fields to empty when the block
/// does not carry (or carries a malformed) labeled line for them.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct InstrumentRecord {
    pub symbol: String,
    pub signal: String,
    pub price: f64,
    pub change: String,
    pub rsi: f64,
    pub macd: f64,
    pub sma20: String,
    pub sma50: String,
    pub volume: String,
    /// Composite strength of the signal, when the block reports one
    pub signal_strength: Option<f64>,
}

impl InstrumentRecord {
    /// Start a record for a new block with every other field at its default
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            ..Default::default()
        }
    }
}

/// Report-level metadata found above the instrument table
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ReportHeader {
    pub title: Option<String>,
    pub generated_on: Option<NaiveDateTime>,
}

/// A labeled line whose value could not be extracted
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParseWarning {
    /// 1-based line number in the source text
    pub line_number: usize,
    /// Name of the field that was skipped
    pub field: &'static str,
    pub line: String,
}

/// Everything recovered from one pass over a report
#[derive(Debug, Clone, Default, Serialize)]
pub struct ParsedReport {
    pub header: ReportHeader,
    pub records: Vec<InstrumentRecord>,
    pub warnings: Vec<ParseWarning>,
}

impl ParsedReport {
    /// Number of instrument blocks found
    pub fn record_count(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
