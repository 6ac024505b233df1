use clap::Parser;
use std::path::PathBuf;

use crate::api;

/// Arguments for the generate command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate a bundle:\n    bundlesmith generate \"a todo list app with auth\"\n\n\
                  Choose the output path:\n    bundlesmith generate \"a blog\" -o blog_bundle.json\n\n\
                  Interactive mode (type 'exit' to quit):\n    bundlesmith generate -i")]
pub struct GenerateArgs {
    /// Description of the application to generate
    pub description: Option<String>,

    /// Output path for the bundle JSON (defaults to <name>_bundle_<timestamp>.json)
    #[arg(long, short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Run in interactive mode: prompt for descriptions in a loop
    #[arg(long, short = 'i')]
    pub interactive: bool,

    /// Model used for generation
    #[arg(long, value_name = "MODEL", default_value = api::DEFAULT_MODEL)]
    pub model: String,

    /// Anthropic API key (reads ANTHROPIC_API_KEY from environment or .env)
    #[arg(long, value_name = "KEY", env = "ANTHROPIC_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,
}
