//! Report loader
//!
//! Fetches the report text once, parses it, composes a card per record and
//! attaches the cards to a display surface. A failed fetch is logged and
//! leaves the surface untouched; cards are only attached after the whole
//! report has been read.

pub mod source;

#[cfg(test)]
mod tests;

pub use self::source::ReportSource;

use crate::composer::compose_record;
use crate::config::HttpConfig;
use crate::error::Result;
use crate::parser::parse_report;
use crate::surface::DisplaySurface;
use std::time::{Duration, Instant};
use tracing::{error, info, warn};

/// Outcome of one successful load cycle
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadSummary {
    /// Cards attached to the surface
    pub cards_attached: usize,
    /// Labeled lines skipped because they were malformed
    pub warnings: usize,
    /// Size of the report text in bytes
    pub bytes_read: usize,
    pub elapsed: Duration,
}

/// Orchestrates fetch, parse and compose for one report
#[derive(Debug, Clone, Default)]
pub struct ReportLoader {
    http: HttpConfig,
}

impl ReportLoader {
    pub fn new(http: HttpConfig) -> Self {
        Self { http }
    }

    /// Load a report onto a surface
    ///
    /// Retrieval errors are logged here and returned to the caller; the
    /// surface is not modified in that case.
    pub async fn load<S: DisplaySurface>(
        &self,
        source: &ReportSource,
        surface: &mut S,
    ) -> Result<LoadSummary> {
        let start = Instant::now();
        info!("Loading report from {}", source);

        let text = match source.fetch(&self.http).await {
            Ok(text) => text,
            Err(e) => {
                error!("Failed to load report from {}: {}", source, e);
                return Err(e);
            }
        };

        let summary = attach_report(&text, surface);
        let summary = LoadSummary {
            elapsed: start.elapsed(),
            ..summary
        };

        info!(
            "Attached {} cards from {} ({} bytes, {} warnings)",
            summary.cards_attached, source, summary.bytes_read, summary.warnings
        );
        Ok(summary)
    }
}

/// Parse report text and attach one card per record
pub fn attach_report<S: DisplaySurface>(text: &str, surface: &mut S) -> LoadSummary {
    let report = parse_report(text);

    if report.is_empty() {
        warn!("Report contains no instrument blocks");
    }

    let cards_attached = report.record_count();
    let warnings = report.warnings.len();

    surface.set_header(report.header);
    for record in &report.records {
        surface.attach(compose_record(record));
    }

    LoadSummary {
        cards_attached,
        warnings,
        bytes_read: text.len(),
        elapsed: Duration::ZERO,
    }
}
