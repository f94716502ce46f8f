//! Card composition.
//!
//! Combines a parsed record with its derived categories into a display-ready
//! node. Composition only reads the record; attaching the node to a surface
//! is the loader's job.

use crate::classifier::{MacdClass, RsiClass, SignalClass};
use crate::constants::CARD_CLASS;
use crate::models::InstrumentRecord;
use serde::Serialize;

/// The three categories derived from a record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Classifications {
    pub signal: SignalClass,
    pub rsi: RsiClass,
    pub macd: MacdClass,
}

impl Classifications {
    /// Classify every categorised field of a record
    pub fn of(record: &InstrumentRecord) -> Self {
        Self {
            signal: SignalClass::classify(&record.signal),
            rsi: RsiClass::classify(record.rsi),
            macd: MacdClass::classify(record.macd),
        }
    }
}

/// Queryable attributes exposed for filtering and sorting
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NodeAttributes {
    /// Lowercased signal text
    pub signal: String,
    pub price: f64,
    pub rsi: f64,
}

/// A composed summary card
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PresentationNode {
    #[serde(flatten)]
    pub record: InstrumentRecord,
    pub classes: Classifications,
    pub attributes: NodeAttributes,
}

impl PresentationNode {
    pub fn symbol(&self) -> &str {
        &self.record.symbol
    }

    /// Style classes of the card: the shared card class then the signal class
    pub fn card_classes(&self) -> [&'static str; 2] {
        [CARD_CLASS, self.classes.signal.as_str()]
    }
}

/// Build a card from a record and its classifications
pub fn compose(record: &InstrumentRecord, classes: Classifications) -> PresentationNode {
    debug_assert!(!record.symbol.is_empty(), "records always carry a symbol");

    PresentationNode {
        record: record.clone(),
        classes,
        attributes: NodeAttributes {
            signal: record.signal.to_lowercase(),
            price: record.price,
            rsi: record.rsi,
        },
    }
}

/// Classify a record and build its card
pub fn compose_record(record: &InstrumentRecord) -> PresentationNode {
    compose(record, Classifications::of(record))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(symbol: &str, signal: &str, rsi: f64, macd: f64) -> InstrumentRecord {
        InstrumentRecord {
            signal: signal.to_string(),
            price: 2456.75,
            change: "+1.23%".to_string(),
            rsi,
            macd,
            ..InstrumentRecord::new(symbol)
        }
    }

    #[test]
    fn test_compose_derives_classes_and_attributes() {
        let source = record("RELIANCE", "Strong Buy", 75.0, 1.2);
        let node = compose_record(&source);

        assert_eq!(node.symbol(), "RELIANCE");
        assert_eq!(node.record, source);
        assert_eq!(node.classes.signal, SignalClass::Buy);
        assert_eq!(node.classes.rsi, RsiClass::Overbought);
        assert_eq!(node.classes.macd, MacdClass::Bullish);
        assert_eq!(node.attributes.signal, "strong buy");
        assert_eq!(node.attributes.price, 2456.75);
        assert_eq!(node.attributes.rsi, 75.0);
    }

    #[test]
    fn test_compose_uses_given_classifications() {
        let source = record("TCS", "Sell", 25.0, -0.5);
        let classes = Classifications {
            signal: SignalClass::Neutral,
            rsi: RsiClass::NeutralBullish,
            macd: MacdClass::Bullish,
        };
        let node = compose(&source, classes);

        assert_eq!(node.classes, classes);
        assert_eq!(node.card_classes(), ["stock-card", "neutral"]);
    }

    #[test]
    fn test_serialized_node_is_flat() {
        let node = compose_record(&record("TCS", "Sell", 25.0, -0.5));
        let value = serde_json::to_value(&node).unwrap();

        assert_eq!(value["symbol"], "TCS");
        assert_eq!(value["classes"]["rsi"], "oversold");
        assert_eq!(value["classes"]["macd"], "bearish");
        assert_eq!(value["attributes"]["signal"], "sell");
    }
}
