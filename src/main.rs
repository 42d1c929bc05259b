use std::process;

use clap::Parser;
use toolbelt::Cli;

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with RUST_LOG environment variable support.
    // Default to "warn" level if RUST_LOG is not set; --debug forces "debug".
    // Write to stderr so debug logs don't interfere with stdout output.
    let filter = if cli.debug {
        tracing_subscriber::EnvFilter::new("debug")
    } else {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();

    if let Err(e) = cli.execute() {
        eprintln!("Error: {e}");

        // Print the full error chain if available
        for cause in e.chain().skip(1) {
            eprintln!("  Caused by: {cause}");
        }

        process::exit(1);
    }
}
