//! Nifty Cards Library
//!
//! Turns a Nifty 50 technical analysis report (markdown, one table row per
//! instrument) into classified summary cards.
//!
//! This library provides tools for:
//! - Parsing instrument blocks out of loosely formatted report text
//! - Classifying RSI, MACD and signal fields into presentation categories
//! - Composing display-ready cards with filterable attributes
//! - Loading reports from disk or over HTTP and rendering them as text, HTML or JSON

pub mod classifier;
pub mod cli;
pub mod commands;
pub mod composer;
pub mod config;
pub mod constants;
pub mod error;
pub mod loader;
pub mod models;
pub mod parser;
pub mod render;
pub mod surface;

// Re-export commonly used types
pub use classifier::{MacdClass, RsiClass, SignalClass, macd_class, rsi_class, signal_class};
pub use composer::{Classifications, NodeAttributes, PresentationNode, compose, compose_record};
pub use config::{CardsConfig, OutputFormat};
pub use error::{CardsError, Result};
pub use loader::{LoadSummary, ReportLoader, ReportSource};
pub use models::{InstrumentRecord, ParseWarning, ParsedReport, ReportHeader};
pub use parser::{parse, parse_report};
pub use surface::{CardDeck, DisplaySurface, SignalSummary};
