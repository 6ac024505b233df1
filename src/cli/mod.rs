//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - generate: Generate command arguments
//! - reconstitute: Reconstitute command arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};

pub mod completions;
pub mod generate;
pub mod reconstitute;

pub use completions::CompletionsArgs;
pub use generate::GenerateArgs;
pub use reconstitute::ReconstituteArgs;

/// Bundlesmith - SaaS JSON bundle generator
///
/// Generate complete application bundles from natural-language descriptions.
#[derive(Parser, Debug)]
#[command(
    name = "bundlesmith",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Generate SaaS application JSON bundles from natural-language descriptions",
    long_about = "Bundlesmith asks Claude to describe a complete application as a JSON bundle \
                  (file tree, dependencies, database schema, routes, tests), saves the bundle \
                  to disk and can expand it into a real project directory.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  bundlesmith generate \"a todo list app\"      \x1b[90m# Generate a bundle\x1b[0m\n   \
                  bundlesmith generate -i                      \x1b[90m# Interactive mode\x1b[0m\n   \
                  bundlesmith generate \"a blog\" -o blog.json   \x1b[90m# Choose the output path\x1b[0m\n   \
                  bundlesmith reconstitute blog.json           \x1b[90m# Expand a bundle into files\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a bundle from an application description
    Generate(GenerateArgs),

    /// Expand a bundle file into a project directory
    Reconstitute(ReconstituteArgs),

    /// Show version information
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing_generate() {
        let cli = Cli::try_parse_from(["bundlesmith", "generate", "a todo app"]).unwrap();
        match cli.command {
            Commands::Generate(args) => {
                assert_eq!(args.description, Some("a todo app".to_string()));
                assert!(!args.interactive);
            }
            _ => panic!("Expected Generate command"),
        }
    }

    #[test]
    fn test_cli_parsing_reconstitute() {
        let cli = Cli::try_parse_from(["bundlesmith", "reconstitute", "bundle.json"]).unwrap();
        match cli.command {
            Commands::Reconstitute(args) => {
                assert_eq!(args.bundle.to_string_lossy(), "bundle.json");
                assert!(args.dest.is_none());
            }
            _ => panic!("Expected Reconstitute command"),
        }
    }

    #[test]
    fn test_cli_parsing_version() {
        let cli = Cli::try_parse_from(["bundlesmith", "version"]).unwrap();
        assert!(matches!(cli.command, Commands::Version));
    }

    #[test]
    fn test_cli_parsing_verbose_global() {
        let cli = Cli::try_parse_from(["bundlesmith", "generate", "-v", "an app"]).unwrap();
        assert!(cli.verbose);
    }
}
