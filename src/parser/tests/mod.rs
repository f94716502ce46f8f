//! Test fixtures for report parser testing
//!
//! Builds report text in the layout the analysis job writes, so individual
//! suites can assemble blocks with or without particular fields.

mod properties_tests;

/// Report header and section preamble written above the instrument table
pub fn report_preamble() -> String {
    r#"# Nifty 50 Technical Analysis Report

*Generated on: 2024-03-01 16:05:09*

## Nifty 50 Index Overview

- Current Value: **22,338.75** (+0.45%)
- Signal: **Buy** (Strength: 1.20)
- RSI: 61.45
- MACD: 45.120

## Market Analysis Summary

- Strong Buy/Buy Signals: **1 stocks**
- Sell Signals: **1 stocks**
- Strong Sell Signals: **0 stocks**

## Detailed Stock Analysis

| Stock Analysis | Technical Chart |
|----------------|------------------|
"#
    .to_string()
}

/// Fields of one instrument block
pub struct BlockFields<'a> {
    pub symbol: &'a str,
    pub signal: &'a str,
    pub price: &'a str,
    pub change: &'a str,
    pub rsi: &'a str,
    pub macd: &'a str,
    pub strength: &'a str,
    pub volume: Option<&'a str>,
}

impl<'a> BlockFields<'a> {
    pub fn new(symbol: &'a str) -> Self {
        Self {
            symbol,
            signal: "Buy",
            price: "1,000.00",
            change: "+0.50%",
            rsi: "50.00",
            macd: "0.100",
            strength: "1.50",
            volume: Some("Normal (1.00x)"),
        }
    }
}

/// Render one block the way the report generator writes a table row
pub fn block(b: &BlockFields<'_>) -> String {
    let mut text = format!(
        "| **{}**<br>\nSignal: {}<br>\nPrice: ₹{} ({})<br>\nRSI: {}<br>\nMACD: {}<br>\nSignal Strength: {}<br>\nSMA20: ₹990.00<br>\nSMA50: ₹975.25<br>\n",
        b.symbol, b.signal, b.price, b.change, b.rsi, b.macd, b.strength
    );
    match b.volume {
        Some(volume) => text.push_str(&format!(
            "Volume: {} | ![{} Chart](charts/{}.png) |\n",
            volume, b.symbol, b.symbol
        )),
        None => text.push_str(&format!(
            "| ![{} Chart](charts/{}.png) |\n",
            b.symbol, b.symbol
        )),
    }
    text
}

/// The two-instrument report used by the end-to-end scenarios
pub fn two_block_report() -> String {
    let mut text = report_preamble();
    text.push_str("\n### Buy Signals\n\n");
    text.push_str(&block(&BlockFields {
        signal: "Strong Buy",
        price: "2,456.75",
        change: "+1.23%",
        rsi: "75.00",
        macd: "1.200",
        ..BlockFields::new("RELIANCE")
    }));
    text.push_str("\n### Sell Signals\n\n");
    text.push_str(&block(&BlockFields {
        signal: "Sell",
        price: "3,880.10",
        change: "-0.85%",
        rsi: "25.00",
        macd: "-0.500",
        strength: "-3.10",
        ..BlockFields::new("TCS")
    }));
    text
}
