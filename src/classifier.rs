//! Presentation categories derived from record fields.
//!
//! Each classifier is a total function over its input; there is no error path.

use crate::constants::{MACD_BULLISH_ABOVE, RSI_OVERBOUGHT, RSI_OVERSOLD};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Direction of the analyst signal text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SignalClass {
    Buy,
    Sell,
    Neutral,
}

/// RSI band
///
/// The band between the thresholds is styled as a confirming state rather than
/// a plain neutral one, hence `NeutralBullish`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RsiClass {
    Overbought,
    Oversold,
    NeutralBullish,
}

/// MACD direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MacdClass {
    Bullish,
    Bearish,
}

impl SignalClass {
    /// Classify signal text by case-insensitive containment; "buy" wins over "sell"
    pub fn classify(signal: &str) -> Self {
        let signal = signal.to_lowercase();
        if signal.contains("buy") {
            SignalClass::Buy
        } else if signal.contains("sell") {
            SignalClass::Sell
        } else {
            SignalClass::Neutral
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SignalClass::Buy => "buy",
            SignalClass::Sell => "sell",
            SignalClass::Neutral => "neutral",
        }
    }
}

impl RsiClass {
    pub fn classify(rsi: f64) -> Self {
        if rsi > RSI_OVERBOUGHT {
            RsiClass::Overbought
        } else if rsi < RSI_OVERSOLD {
            RsiClass::Oversold
        } else {
            RsiClass::NeutralBullish
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RsiClass::Overbought => "overbought",
            RsiClass::Oversold => "oversold",
            RsiClass::NeutralBullish => "neutral-bullish",
        }
    }
}

impl MacdClass {
    pub fn classify(macd: f64) -> Self {
        if macd > MACD_BULLISH_ABOVE {
            MacdClass::Bullish
        } else {
            MacdClass::Bearish
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MacdClass::Bullish => "bullish",
            MacdClass::Bearish => "bearish",
        }
    }
}

impl fmt::Display for SignalClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for RsiClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for MacdClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Signal class of a signal label
pub fn signal_class(signal: &str) -> SignalClass {
    SignalClass::classify(signal)
}

/// RSI class of an RSI reading
pub fn rsi_class(rsi: f64) -> RsiClass {
    RsiClass::classify(rsi)
}

/// MACD class of a MACD reading
pub fn macd_class(macd: f64) -> MacdClass {
    MacdClass::classify(macd)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rsi_thresholds() {
        assert_eq!(rsi_class(70.0), RsiClass::NeutralBullish);
        assert_eq!(rsi_class(70.01), RsiClass::Overbought);
        assert_eq!(rsi_class(30.0), RsiClass::NeutralBullish);
        assert_eq!(rsi_class(29.99), RsiClass::Oversold);
        assert_eq!(rsi_class(0.0), RsiClass::Oversold);
        assert_eq!(rsi_class(150.0), RsiClass::Overbought);
    }

    #[test]
    fn test_macd_zero_is_bearish() {
        assert_eq!(macd_class(0.0), MacdClass::Bearish);
        assert_eq!(macd_class(-0.0), MacdClass::Bearish);
        assert_eq!(macd_class(0.0001), MacdClass::Bullish);
        assert_eq!(macd_class(-12.5), MacdClass::Bearish);
    }

    #[test]
    fn test_signal_containment() {
        assert_eq!(signal_class("Strong Buy"), SignalClass::Buy);
        assert_eq!(signal_class("STRONG SELL"), SignalClass::Sell);
        assert_eq!(signal_class("Hold"), SignalClass::Neutral);
        assert_eq!(signal_class(""), SignalClass::Neutral);
    }

    #[test]
    fn test_signal_buy_wins_tie() {
        assert_eq!(signal_class("Buy/Sell Watch"), SignalClass::Buy);
        assert_eq!(signal_class("sell then BUY"), SignalClass::Buy);
    }

    #[test]
    fn test_labels() {
        assert_eq!(RsiClass::NeutralBullish.to_string(), "neutral-bullish");
        assert_eq!(MacdClass::Bullish.as_str(), "bullish");
        assert_eq!(SignalClass::Neutral.as_str(), "neutral");
        assert_eq!(
            serde_json::to_string(&RsiClass::NeutralBullish).unwrap(),
            "\"neutral-bullish\""
        );
    }
}
