//! Structural properties of the record sequence

use super::*;
use crate::parser::parse;

#[test]
fn test_one_record_per_block_in_source_order() {
    let symbols = [
        "ADANIENT.NS",
        "AXISBANK.NS",
        "BAJAJ-AUTO.NS",
        "CIPLA.NS",
        "DRREDDY.NS",
        "GRASIM.NS",
        "HINDALCO.NS",
    ];
    let mut text = report_preamble();
    for symbol in symbols {
        text.push_str(&block(&BlockFields::new(symbol)));
    }

    let records = parse(&text);
    let parsed: Vec<&str> = records.iter().map(|r| r.symbol.as_str()).collect();
    assert_eq!(parsed, symbols);
}

#[test]
fn test_fields_in_any_order() {
    let text = "| **MARUTI.NS**<br>\nVolume: Low (0.40x) | chart |\nMACD: 0.004<br>\nSMA50: ₹10,100.00<br>\nRSI: 69.99<br>\nSignal: Buy<br>\nPrice: ₹10,512.00 (+0.02%)<br>\nSMA20: ₹10,300.00<br>\n";
    let records = parse(text);
    let record = &records[0];

    assert_eq!(record.volume, "Low (0.40x)");
    assert_eq!(record.macd, 0.004);
    assert_eq!(record.sma50, "₹10,100.00");
    assert_eq!(record.rsi, 69.99);
    assert_eq!(record.signal, "Buy");
    assert_eq!(record.price, 10512.0);
    assert_eq!(record.sma20, "₹10,300.00");
}

#[test]
fn test_blocks_without_fields_still_emitted() {
    let records = parse("| **BPCL.NS**<br>\n| **COALINDIA.NS**<br>\n");

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].price, 0.0);
    assert_eq!(records[0].signal_strength, None);
    assert_eq!(records[1].symbol, "COALINDIA.NS");
}
