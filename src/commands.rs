//! Command implementation for the card builder CLI
//!
//! Sets up logging, layers configuration, loads the report onto a card
//! deck and writes the rendered deck.

use crate::cli::Args;
use crate::config::CardsConfig;
use crate::constants::LOG_TARGET;
use crate::loader::{LoadSummary, ReportLoader, ReportSource};
use crate::render::render;
use crate::surface::CardDeck;
use anyhow::{Context, Result};
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;
use tracing::{debug, info};

/// Run one load-and-render cycle
pub async fn run(args: Args) -> Result<LoadSummary> {
    setup_logging(&args);
    debug!("Command line arguments: {:?}", args);

    let config = load_configuration(&args)?;
    debug!("Loaded configuration: {:?}", config);

    let source = match &args.input {
        Some(input) => ReportSource::from_arg(input),
        None => ReportSource::discover(&config)?,
    };

    let spinner = args.show_progress().then(|| fetch_spinner(&source));

    let loader = ReportLoader::new(config.http.clone());
    let mut deck = CardDeck::new();
    let result = loader.load(&source, &mut deck).await;

    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }
    let summary = result.with_context(|| format!("Could not load report {}", source))?;

    if let Some(min_strength) = config.min_strength {
        let before = deck.len();
        deck.retain_min_strength(min_strength);
        info!(
            "Strength filter {:.2} hid {} cards",
            min_strength,
            before - deck.len()
        );
    }

    let rendered = render(&deck, config.output.format)?;
    match &config.output.path {
        Some(path) => {
            tokio::fs::write(path, rendered)
                .await
                .with_context(|| format!("Failed to write cards to {}", path.display()))?;
            if args.show_progress() {
                println!(
                    "{} {} cards to {}",
                    "Wrote".bright_green(),
                    deck.len().to_string().bright_white().bold(),
                    path.display()
                );
            }
        }
        None => print!("{}", rendered),
    }

    if args.show_progress() && summary.warnings > 0 {
        eprintln!(
            "{} {} malformed fields were skipped (run with -v for details)",
            "Note:".bright_yellow(),
            summary.warnings
        );
    }

    Ok(summary)
}

/// Set up structured logging based on CLI arguments
fn setup_logging(args: &Args) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{}={}", LOG_TARGET, log_level)));

    // a subscriber may already be installed when embedded or under test
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .try_init();

    debug!("Logging initialized at level: {}", log_level);
}

/// Layer config file values and CLI overrides
fn load_configuration(args: &Args) -> Result<CardsConfig> {
    let mut config = CardsConfig::load(args.config.as_deref())?;

    if let Some(format) = args.format {
        config = config.with_format(format);
    }
    if let Some(path) = &args.output {
        config = config.with_output_path(path);
    }
    if let Some(dir) = &args.drafts_dir {
        config = config.with_drafts_dir(dir);
    }
    if let Some(min_strength) = args.min_strength {
        config = config.with_min_strength(min_strength);
    }
    if let Some(secs) = args.timeout {
        config = config.with_timeout_secs(secs);
    }

    config.validate()?;
    Ok(config)
}

fn fetch_spinner(source: &ReportSource) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message(format!("Fetching {}", source));
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}
