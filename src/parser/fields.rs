//! Labeled field extraction for instrument blocks
//!
//! Each field of a block is carried on its own labeled line, surrounded by
//! arbitrary table markup. A field is described by its label and an extractor
//! that pulls the value out of a line, returning `None` when the line does not
//! have the expected shape.

use crate::constants::labels;
use crate::models::InstrumentRecord;
use regex::Regex;
use std::sync::LazyLock;

static SIGNAL_RE: LazyLock<Regex> = LazyLock::new(|| compile(r"Signal:\s*(.*?)<br>"));
static SIGNAL_STRENGTH_RE: LazyLock<Regex> =
    LazyLock::new(|| compile(r"Signal Strength:\s*([-+]?\d+(?:\.\d+)?)"));
static PRICE_RE: LazyLock<Regex> =
    LazyLock::new(|| compile(r"Price:\s*₹([\d,]+(?:\.\d+)?),?\s*\(([^)]*)\)"));
static RSI_RE: LazyLock<Regex> = LazyLock::new(|| compile(r"RSI:\s*([-+]?\d+(?:\.\d+)?)"));
static MACD_RE: LazyLock<Regex> =
    LazyLock::new(|| compile(r"MACD:\s*([-+]?(?:\d+(?:\.\d*)?|\.\d+))"));
static SMA20_RE: LazyLock<Regex> = LazyLock::new(|| compile(r"SMA20:\s*(.*?)<br>"));
static SMA50_RE: LazyLock<Regex> = LazyLock::new(|| compile(r"SMA50:\s*(.*?)<br>"));
static VOLUME_RE: LazyLock<Regex> = LazyLock::new(|| compile(r"Volume:\s*(.*?)\s*\|"));

/// Patterns are literals; a failure here is a programming error caught by the test suite.
fn compile(pattern: &str) -> Regex {
    match Regex::new(pattern) {
        Ok(re) => re,
        Err(e) => panic!("invalid field pattern {pattern:?}: {e}"),
    }
}

/// A value pulled out of one labeled line
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Signal(String),
    SignalStrength(f64),
    Price { price: f64, change: String },
    Rsi(f64),
    Macd(f64),
    Sma20(String),
    Sma50(String),
    Volume(String),
}

impl FieldValue {
    /// Store the value on the record under construction
    pub fn apply(self, record: &mut InstrumentRecord) {
        match self {
            FieldValue::Signal(signal) => record.signal = signal,
            FieldValue::SignalStrength(strength) => record.signal_strength = Some(strength),
            FieldValue::Price { price, change } => {
                record.price = price;
                record.change = change;
            }
            FieldValue::Rsi(rsi) => record.rsi = rsi,
            FieldValue::Macd(macd) => record.macd = macd,
            FieldValue::Sma20(sma) => record.sma20 = sma,
            FieldValue::Sma50(sma) => record.sma50 = sma,
            FieldValue::Volume(volume) => record.volume = volume,
        }
    }
}

/// One entry of the field table
#[derive(Debug, Clone, Copy)]
pub struct LabeledField {
    /// Field name used in warnings
    pub name: &'static str,
    /// Label whose presence marks a line as carrying this field
    pub label: &'static str,
    extract: fn(&str) -> Option<FieldValue>,
}

impl LabeledField {
    /// Whether the line carries this field's label at all
    pub fn is_labeled(&self, line: &str) -> bool {
        line.contains(self.label)
    }

    /// Extract the field value from a line, if it has the expected shape
    pub fn extract(&self, line: &str) -> Option<FieldValue> {
        (self.extract)(line)
    }
}

/// Every field recognised inside an instrument block, checked independently
pub static FIELDS: [LabeledField; 8] = [
    LabeledField {
        name: "signal",
        label: labels::SIGNAL,
        extract: extract_signal,
    },
    LabeledField {
        name: "signal_strength",
        label: labels::SIGNAL_STRENGTH,
        extract: extract_signal_strength,
    },
    LabeledField {
        name: "price",
        label: labels::PRICE,
        extract: extract_price,
    },
    LabeledField {
        name: "rsi",
        label: labels::RSI,
        extract: extract_rsi,
    },
    LabeledField {
        name: "macd",
        label: labels::MACD,
        extract: extract_macd,
    },
    LabeledField {
        name: "sma20",
        label: labels::SMA20,
        extract: extract_sma20,
    },
    LabeledField {
        name: "sma50",
        label: labels::SMA50,
        extract: extract_sma50,
    },
    LabeledField {
        name: "volume",
        label: labels::VOLUME,
        extract: extract_volume,
    },
];

fn capture<'a>(re: &Regex, line: &'a str) -> Option<&'a str> {
    re.captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

fn capture_decimal(re: &Regex, line: &str) -> Option<f64> {
    capture(re, line).and_then(parse_decimal)
}

/// Parse a decimal, ignoring digit-group separators
pub fn parse_decimal(value: &str) -> Option<f64> {
    let cleaned: String = value.chars().filter(|c| *c != ',').collect();
    cleaned.parse::<f64>().ok().filter(|v| v.is_finite())
}

fn extract_signal(line: &str) -> Option<FieldValue> {
    capture(&SIGNAL_RE, line).map(|s| FieldValue::Signal(s.to_string()))
}

fn extract_signal_strength(line: &str) -> Option<FieldValue> {
    capture_decimal(&SIGNAL_STRENGTH_RE, line).map(FieldValue::SignalStrength)
}

fn extract_price(line: &str) -> Option<FieldValue> {
    let caps = PRICE_RE.captures(line)?;
    let price = parse_decimal(caps.get(1)?.as_str())?;
    let change = caps.get(2)?.as_str().to_string();
    Some(FieldValue::Price { price, change })
}

fn extract_rsi(line: &str) -> Option<FieldValue> {
    capture_decimal(&RSI_RE, line).map(FieldValue::Rsi)
}

fn extract_macd(line: &str) -> Option<FieldValue> {
    capture_decimal(&MACD_RE, line).map(FieldValue::Macd)
}

fn extract_sma20(line: &str) -> Option<FieldValue> {
    capture(&SMA20_RE, line).map(|s| FieldValue::Sma20(s.to_string()))
}

fn extract_sma50(line: &str) -> Option<FieldValue> {
    capture(&SMA50_RE, line).map(|s| FieldValue::Sma50(s.to_string()))
}

fn extract_volume(line: &str) -> Option<FieldValue> {
    capture(&VOLUME_RE, line).map(|s| FieldValue::Volume(s.to_string()))
}
