use clap::Parser;
use std::path::PathBuf;

/// Arguments for the reconstitute command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Expand a bundle into <name>_<timestamp>/:\n    bundlesmith reconstitute todo_bundle.json\n\n\
                  Expand into a specific directory (replaced if it exists):\n    bundlesmith reconstitute todo_bundle.json --dest ./todo-app")]
pub struct ReconstituteArgs {
    /// Path to the bundle JSON file
    pub bundle: PathBuf,

    /// Destination directory (defaults to <name>_<timestamp> in the current directory)
    #[arg(long, value_name = "DIR")]
    pub dest: Option<PathBuf>,
}
