//! Bundlesmith - SaaS JSON bundle generator
//!
//! A command line tool that turns a natural-language application description
//! into a structured JSON bundle (file tree, dependencies, database schema,
//! routes, test stubs) by asking Claude, and that can reconstitute such a
//! bundle into a real project directory.

use clap::Parser;

mod api;
mod bundle;
mod cli;
mod commands;
mod error;
mod progress;
mod prompt;

use cli::{Cli, Commands};

fn main() {
    // A .env file in the working directory may provide ANTHROPIC_API_KEY.
    // Must run before argument parsing so clap's env fallback sees it.
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Generate(args) => commands::generate::run(cli.verbose, args),
        Commands::Reconstitute(args) => commands::reconstitute::run(args),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
