mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use commands::{options, render};

/// Install the stderr log subscriber. `RUST_LOG` wins; otherwise `-v` raises the level.
fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match &cli.command {
        Commands::Options(args) => options::run(&cli, args),
        Commands::Render(args) => render::run(&cli, args),
        #[cfg(feature = "download")]
        Commands::Download(args) => commands::download::run(&cli, args),
    }
}
