//! kitprops CLI - derive qbs build properties from toolchain kits

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use kitprops::core::KitError;
use kitprops::util::diagnostic::{emit, KitFileParseError};

mod cli;
mod commands;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    let color = !cli.no_color;

    if let Err(e) = run(cli) {
        if let Some(kit_err) = e.downcast_ref::<KitError>() {
            emit(&kit_err.to_diagnostic(), color);
        } else if let Some(parse_err) = e.downcast_ref::<KitFileParseError>() {
            eprint!("{}", parse_err.render());
        } else {
            eprintln!("error: {:#}", e);
        }
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    // Set up logging
    let filter = if cli.verbose {
        EnvFilter::new("kitprops=debug")
    } else {
        EnvFilter::new("kitprops=info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(!cli.no_color)
        .with_writer(std::io::stderr)
        .without_time()
        .init();

    match cli.command {
        Commands::Properties(args) => commands::properties::execute(args),
        Commands::Kit(args) => commands::kit::execute(args),
        Commands::Imports(args) => commands::imports::execute(args),
        Commands::Completions(args) => commands::completions::execute(args),
    }
}
