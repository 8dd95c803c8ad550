//! depcheck CLI
//!
//! Checks that the resources an application manifest asks for are provisioned
//! in its target environment.

use clap::{Parser, Subcommand};

mod commands;

/// Exit status when setup (arguments, files, clients) fails before any check runs
const EXIT_SETUP: i32 = 2;
/// Exit status when at least one category failed or errored
const EXIT_FAILED: i32 = 1;

#[derive(Debug, Parser)]
#[command(name = "depcheck")]
#[command(about = "depcheck - application dependency provisioning checks", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Check a manifest against the configured backends
    Check(commands::check::CheckArgs),
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Check(args) => commands::check::execute(args),
    };

    match result {
        Ok(true) => {}
        Ok(false) => std::process::exit(EXIT_FAILED),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(EXIT_SETUP);
        }
    }
}
