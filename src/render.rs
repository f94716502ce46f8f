//! Rendering of card decks.
//!
//! HTML cards expose `data-signal`, `data-price` and `data-rsi` attributes
//! for client-side filtering and sorting, and carry the derived categories
//! as CSS classes.

use crate::classifier::SignalClass;
use crate::composer::PresentationNode;
use crate::config::OutputFormat;
use crate::constants::CONTAINER_CLASS;
use crate::error::Result;
use crate::surface::{CardDeck, SignalSummary};
use colored::*;
use serde::Serialize;

/// Render a deck in the requested format
pub fn render(deck: &CardDeck, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(deck)),
        OutputFormat::Html => Ok(render_html(deck)),
        OutputFormat::Json => render_json(deck),
    }
}

#[derive(Serialize)]
struct JsonDocument<'a> {
    #[serde(flatten)]
    deck: &'a CardDeck,
    summary: SignalSummary,
}

/// Pretty JSON with header, summary and cards
pub fn render_json(deck: &CardDeck) -> Result<String> {
    let document = JsonDocument {
        deck,
        summary: deck.summary(),
    };
    Ok(serde_json::to_string_pretty(&document)?)
}

/// Escape text for HTML element content and attribute values
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// One card as an HTML fragment
pub fn render_card_html(node: &PresentationNode) -> String {
    let record = &node.record;
    let classes = node.card_classes().join(" ");
    let mut html = format!(
        "<div class=\"{}\" data-signal=\"{}\" data-price=\"{}\" data-rsi=\"{}\">\n",
        classes,
        escape_html(&node.attributes.signal),
        node.attributes.price,
        node.attributes.rsi
    );

    html.push_str(&format!(
        "  <div class=\"card-header\"><h3>{}</h3><span class=\"signal {}\">{}</span></div>\n",
        escape_html(&record.symbol),
        node.classes.signal,
        escape_html(&record.signal)
    ));
    html.push_str(&format!(
        "  <div class=\"price\">₹{:.2} <span class=\"change\">{}</span></div>\n",
        record.price,
        escape_html(&record.change)
    ));
    html.push_str("  <div class=\"indicators\">\n");
    html.push_str(&format!(
        "    <div class=\"indicator rsi {}\">RSI: {:.2}</div>\n",
        node.classes.rsi, record.rsi
    ));
    html.push_str(&format!(
        "    <div class=\"indicator macd {}\">MACD: {:.3}</div>\n",
        node.classes.macd, record.macd
    ));
    if let Some(strength) = record.signal_strength {
        html.push_str(&format!(
            "    <div class=\"indicator strength\">Strength: {:.2}</div>\n",
            strength
        ));
    }
    for (class, label, value) in [
        ("sma", "SMA20", &record.sma20),
        ("sma", "SMA50", &record.sma50),
        ("volume", "Volume", &record.volume),
    ] {
        html.push_str(&format!(
            "    <div class=\"indicator {}\">{}: {}</div>\n",
            class,
            label,
            escape_html(value)
        ));
    }
    html.push_str("  </div>\n</div>\n");
    html
}

/// Standalone HTML page with summary and cards
pub fn render_html(deck: &CardDeck) -> String {
    let title = escape_html(
        deck.header
            .title
            .as_deref()
            .unwrap_or("Technical Analysis Report"),
    );
    let summary = deck.summary();

    let mut html = String::from("<!DOCTYPE html>\n<html lang=\"en\">\n");
    html.push_str(&format!(
        "<head><meta charset=\"utf-8\"><title>{}</title></head>\n",
        title
    ));
    html.push_str(&format!("<body>\n<h1>{}</h1>\n", title));
    if let Some(generated_on) = deck.header.generated_on {
        html.push_str(&format!(
            "<p class=\"generated-on\">Generated on {}</p>\n",
            generated_on.format("%Y-%m-%d %H:%M:%S")
        ));
    }
    html.push_str(&format!(
        "<ul class=\"summary\"><li class=\"buy\">Buy: {}</li><li class=\"sell\">Sell: {}</li><li class=\"neutral\">Neutral: {}</li></ul>\n",
        summary.buy, summary.sell, summary.neutral
    ));
    html.push_str(&format!("<div class=\"{}\">\n", CONTAINER_CLASS));
    for node in &deck.cards {
        html.push_str(&render_card_html(node));
    }
    html.push_str("</div>\n</body>\n</html>\n");
    html
}

fn paint_signal(node: &PresentationNode) -> ColoredString {
    let label = node.record.signal.as_str();
    match node.classes.signal {
        SignalClass::Buy => label.bright_green().bold(),
        SignalClass::Sell => label.bright_red().bold(),
        SignalClass::Neutral => label.bright_yellow(),
    }
}

/// Terminal lines for one card, starting with a blank separator line
fn render_card_text(node: &PresentationNode) -> String {
    let record = &node.record;
    let mut lines = vec![
        String::new(),
        format!("{}  {}", record.symbol.bright_white().bold(), paint_signal(node)),
        format!(
            "  {} ₹{:.2} ({})",
            "Price:".bright_cyan(),
            record.price,
            record.change
        ),
        format!(
            "  {} {:.2} [{}]   {} {:.3} [{}]",
            "RSI:".bright_cyan(),
            record.rsi,
            node.classes.rsi,
            "MACD:".bright_cyan(),
            record.macd,
            node.classes.macd
        ),
    ];
    if let Some(strength) = record.signal_strength {
        lines.push(format!("  {} {:.2}", "Strength:".bright_cyan(), strength));
    }
    lines.push(format!(
        "  {} {}   {} {}",
        "SMA20:".bright_cyan(),
        record.sma20,
        "SMA50:".bright_cyan(),
        record.sma50
    ));
    lines.push(format!("  {} {}", "Volume:".bright_cyan(), record.volume));

    lines.into_iter().map(|line| line + "\n").collect()
}

/// Terminal cards, coloured when stdout supports it
pub fn render_text(deck: &CardDeck) -> String {
    let summary = deck.summary();
    let mut out = String::new();

    if let Some(title) = &deck.header.title {
        out.push_str(&format!("{}\n", title.bright_green().bold()));
    }
    if let Some(generated_on) = deck.header.generated_on {
        out.push_str(&format!(
            "  {} {}\n",
            "Generated on:".bright_cyan(),
            generated_on.format("%Y-%m-%d %H:%M:%S")
        ));
    }
    out.push_str(&format!(
        "  {} {}  {} {}  {} {}\n",
        "Buy:".bright_green(),
        summary.buy,
        "Sell:".bright_red(),
        summary.sell,
        "Neutral:".bright_yellow(),
        summary.neutral
    ));

    for node in &deck.cards {
        out.push_str(&render_card_text(node));
    }

    out
}
