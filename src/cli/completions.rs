use clap::Parser;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    bundlesmith completions bash > ~/.bash_completion.d/bundlesmith\n\n\
                  Generate zsh completions:\n    bundlesmith completions zsh > ~/.zfunc/_bundlesmith\n\n\
                  Generate fish completions:\n    bundlesmith completions fish > ~/.config/fish/completions/bundlesmith.fish\n\n\
                  Generate PowerShell completions:\n    bundlesmith completions powershell")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    pub shell: String,
}
