use clap::Parser;
use nifty_cards::cli::Args;
use nifty_cards::{CardsError, commands};
use std::process;

fn main() {
    let args = Args::parse();

    // Create async runtime and run the command with Ctrl+C handling
    let runtime = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
        eprintln!("Failed to create async runtime: {}", e);
        process::exit(1);
    });

    let result = runtime.block_on(async {
        tokio::select! {
            result = commands::run(args) => result,
            _ = tokio::signal::ctrl_c() => {
                eprintln!("\nReceived CTRL+C, shutting down...");
                Err(CardsError::interrupted("Loading interrupted by user").into())
            }
        }
    });

    match result {
        Ok(_summary) => process::exit(0),
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}
