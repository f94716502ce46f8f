//! Report parser
//!
//! Recovers instrument records from a markdown analysis report. The report
//! carries one table row per instrument; the row opens with the bolded
//! symbol and the instrument's fields follow on labeled lines:
//!
//! ```text
//! | **RELIANCE.NS**<br>
//! Signal: Strong Buy<br>
//! Price: ₹2,456.75 (+1.23%)<br>
//! RSI: 75.00<br>
//! MACD: 1.200<br>
//! SMA20: ₹2,401.10<br>
//! SMA50: ₹2,388.00<br>
//! Volume: Normal (1.05x) | ![RELIANCE.NS Chart](charts/RELIANCE.NS.png) |
//! ```
//!
//! Parsing is a single fold over the lines with at most one record open at
//! a time. A labeled line that does not have the expected shape is skipped
//! with a warning; it never aborts the record or the parse.

pub mod fields;
pub mod header;

#[cfg(test)]
mod tests;

use self::fields::FIELDS;
use self::header::ReportHeaderBuilder;
use crate::models::{InstrumentRecord, ParseWarning, ParsedReport};
use regex::Regex;
use std::sync::LazyLock;
use tracing::{debug, warn};

static BLOCK_START_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\|\s*\*\*([^*]+)\*\*").unwrap_or_else(|e| panic!("invalid block pattern: {e}"))
});

/// Lexical class of a report line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line<'a> {
    /// Table row opening a new instrument block, with its symbol
    BlockStart(&'a str),
    /// Any other line
    Body(&'a str),
}

impl<'a> Line<'a> {
    pub fn classify(line: &'a str) -> Self {
        BLOCK_START_RE
            .captures(line)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().trim())
            .filter(|symbol| !symbol.is_empty())
            .map_or(Line::Body(line), Line::BlockStart)
    }
}

/// Accumulator threaded through the scan
#[derive(Debug, Default)]
struct ScanState {
    header: ReportHeaderBuilder,
    current: Option<InstrumentRecord>,
    records: Vec<InstrumentRecord>,
    warnings: Vec<ParseWarning>,
}

impl ScanState {
    fn step(mut self, line_number: usize, line: &str) -> Self {
        match Line::classify(line) {
            Line::BlockStart(symbol) => {
                self.close_block();
                debug!("Block for {} starts at line {}", symbol, line_number);
                self.current = Some(InstrumentRecord::new(symbol));
            }
            Line::Body(text) => match self.current.as_mut() {
                Some(record) => {
                    for field in FIELDS.iter().filter(|f| f.is_labeled(text)) {
                        match field.extract(text) {
                            Some(value) => value.apply(record),
                            None => {
                                warn!(
                                    "Skipping malformed {} for {} at line {}",
                                    field.name, record.symbol, line_number
                                );
                                self.warnings.push(ParseWarning {
                                    line_number,
                                    field: field.name,
                                    line: text.to_string(),
                                });
                            }
                        }
                    }
                }
                None => self.header.parse_line(text),
            },
        }
        self
    }

    fn close_block(&mut self) {
        if let Some(record) = self.current.take() {
            self.records.push(record);
        }
    }

    fn finish(mut self) -> ParsedReport {
        self.close_block();
        ParsedReport {
            header: self.header.build(),
            records: self.records,
            warnings: self.warnings,
        }
    }
}

/// Parse a report into its header, records and warnings
pub fn parse_report(text: &str) -> ParsedReport {
    let report = text
        .lines()
        .enumerate()
        .fold(ScanState::default(), |state, (index, line)| {
            state.step(index + 1, line)
        })
        .finish();

    debug!(
        "Parsed {} records with {} warnings",
        report.records.len(),
        report.warnings.len()
    );
    report
}

/// Parse a report into its instrument records, in source order
pub fn parse(text: &str) -> Vec<InstrumentRecord> {
    parse_report(text).records
}
