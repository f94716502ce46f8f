//! Report header extraction.
//!
//! Picks the report title and generation timestamp out of the lines that
//! precede the first instrument block. Anything unrecognised is ignored.

use crate::constants::{GENERATED_ON_FORMAT, GENERATED_ON_PREFIX};
use crate::models::ReportHeader;
use chrono::NaiveDateTime;
use tracing::warn;

/// Builder for report header extraction
#[derive(Debug, Default)]
pub struct ReportHeaderBuilder {
    title: Option<String>,
    generated_on: Option<NaiveDateTime>,
}

impl ReportHeaderBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn parse_line(&mut self, line: &str) {
        let line = line.trim();
        if line.is_empty() {
            return;
        }

        if self.title.is_none() {
            if let Some(title) = line.strip_prefix("# ") {
                let title = title.trim();
                if !title.is_empty() {
                    self.title = Some(title.to_string());
                }
                return;
            }
        }

        if self.generated_on.is_none() && line.starts_with(GENERATED_ON_PREFIX) {
            self.generated_on = parse_generated_on(line);
        }
    }

    pub fn build(self) -> ReportHeader {
        ReportHeader {
            title: self.title,
            generated_on: self.generated_on,
        }
    }
}

/// Parse `*Generated on: 2024-03-01 16:05:09*` into a timestamp
fn parse_generated_on(line: &str) -> Option<NaiveDateTime> {
    let value = line
        .strip_prefix(GENERATED_ON_PREFIX)?
        .trim()
        .trim_end_matches('*')
        .trim();

    match NaiveDateTime::parse_from_str(value, GENERATED_ON_FORMAT) {
        Ok(timestamp) => Some(timestamp),
        Err(e) => {
            warn!("Could not parse report timestamp '{}': {}", value, e);
            None
        }
    }
}
