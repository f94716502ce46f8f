//! Loader tests over on-disk reports
//!
//! Reports are written into temporary directories laid out like the
//! analysis job's drafts folder.

mod discovery_tests;

use std::fs;
use std::path::{Path, PathBuf};

/// A small report with one buy and one sell instrument
pub const SAMPLE_REPORT: &str = "# Nifty 50 Technical Analysis Report

*Generated on: 2024-03-01 16:05:09*

## Detailed Stock Analysis

| Stock Analysis | Technical Chart |
|----------------|------------------|

### Buy Signals

| **RELIANCE.NS**<br>
Signal: Strong Buy<br>
Price: ₹2,456.75 (+1.23%)<br>
RSI: 75.00<br>
MACD: 1.200<br>
Signal Strength: 2.10<br>
SMA20: ₹2,401.10<br>
SMA50: ₹2,388.00<br>
Volume: High (1.62x) | ![RELIANCE.NS Chart](charts/RELIANCE.NS.png) |

### Sell Signals

| **TCS.NS**<br>
Signal: Sell<br>
Price: ₹3,880.10 (-0.85%)<br>
RSI: 25.00<br>
MACD: -0.500<br>
Signal Strength: -3.10<br>
SMA20: ₹3,910.00<br>
SMA50: ₹3,955.40<br>
Volume: Normal (0.97x) | ![TCS.NS Chart](charts/TCS.NS.png) |
";

/// Write a file into `dir`, returning its path
pub fn write_report(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}
