//! cellscan - search a grid from the command line.

use clap::Parser;

use cellscan_grid::cli::{self, Args};

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let args = Args::parse();

    match cli::run(&args) {
        Ok(output) => println!("{}", output.trim_end()),
        Err(e) => {
            tracing::error!("Search failed: {}", e);
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
