//! Application constants for the report card builder
//!
//! Classification thresholds, report labels, default locations and
//! presentation strings used throughout the crate.

// =============================================================================
// Classification Thresholds
// =============================================================================

/// RSI strictly above this value is overbought
pub const RSI_OVERBOUGHT: f64 = 70.0;

/// RSI strictly below this value is oversold
pub const RSI_OVERSOLD: f64 = 30.0;

/// MACD strictly above this value is bullish; zero itself is bearish
pub const MACD_BULLISH_ABOVE: f64 = 0.0;

// =============================================================================
// Report Format
// =============================================================================

/// Labels of the fields carried inside an instrument block
pub mod labels {
    pub const SIGNAL: &str = "Signal:";
    pub const SIGNAL_STRENGTH: &str = "Signal Strength:";
    pub const PRICE: &str = "Price:";
    pub const RSI: &str = "RSI:";
    pub const MACD: &str = "MACD:";
    pub const SMA20: &str = "SMA20:";
    pub const SMA50: &str = "SMA50:";
    pub const VOLUME: &str = "Volume:";
}

/// Prefix of the report generation timestamp line
pub const GENERATED_ON_PREFIX: &str = "*Generated on:";

/// Timestamp format used in the report header
pub const GENERATED_ON_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

// =============================================================================
// Locations and Defaults
// =============================================================================

/// Directory the analysis job writes its reports into
pub const DEFAULT_DRAFTS_DIR: &str = "drafts";

/// File name pattern of generated reports (dated, so names sort by age)
pub const DEFAULT_REPORT_PATTERN: &str = "nifty50_analysis-*.md";

/// Application directory name under the user config dir
pub const CONFIG_DIR_NAME: &str = "nifty-cards";

/// Configuration file name
pub const CONFIG_FILE_NAME: &str = "config.json";

/// User agent sent when fetching remote reports
pub const DEFAULT_USER_AGENT: &str = concat!("nifty_cards/", env!("CARGO_PKG_VERSION"));

/// Environment filter target for log output
pub const LOG_TARGET: &str = "nifty_cards";

// =============================================================================
// Presentation
// =============================================================================

/// CSS class shared by every card
pub const CARD_CLASS: &str = "stock-card";

/// CSS class of the card container
pub const CONTAINER_CLASS: &str = "stock-cards";
