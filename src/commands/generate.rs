//! Generate command implementation
//!
//! The generation pipeline:
//! 1. Resolve credentials (fatal before any request when absent)
//! 2. Send the description with the fixed system prompt, streaming the reply
//!    while a spinner shows elapsed time
//! 3. Extract the JSON payload after the [JSON_BUNDLE] tag
//! 4. Persist the bundle and the reconstitutor script, print statistics
//!
//! Failures in steps 2-4 are reported and, in interactive mode, the loop
//! continues; nothing is retried.

use std::path::{Path, PathBuf};
use std::time::Instant;

use console::Style;
use inquire::{InquireError, Text};
use serde_json::Value;

use crate::api::Client;
use crate::bundle::extract::Extractor;
use crate::bundle::writer;
use crate::cli::GenerateArgs;
use crate::error::{BundlesmithError, Result};
use crate::progress::GenerationSpinner;
use crate::prompt::SYSTEM_PROMPT;

/// Run generate command
pub fn run(verbose: bool, args: GenerateArgs) -> Result<()> {
    let Some(api_key) = args.api_key else {
        return Err(BundlesmithError::MissingApiKey);
    };

    let client = Client::new(api_key, args.model)?;

    if args.interactive {
        run_interactive(&client, verbose)
    } else {
        let Some(description) = args.description.as_deref() else {
            return Err(BundlesmithError::MissingDescription);
        };
        generate_one(&client, description, args.output.as_deref(), verbose)
    }
}

/// Read-eval loop: prompt, generate, repeat until exit or interrupt
fn run_interactive(client: &Client, verbose: bool) -> Result<()> {
    println!(
        "{}",
        Style::new()
            .bold()
            .apply_to("Bundlesmith - interactive mode")
    );
    println!("Describe the application you want to create. Type 'exit' to quit.\n");

    loop {
        let line = match Text::new(">").prompt() {
            Ok(line) => line,
            // Ctrl-C / ESC at the prompt exits the loop, never the process
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => break,
            Err(e) => return Err(e.into()),
        };

        let description = line.trim();
        if description.is_empty() {
            continue;
        }
        if matches!(
            description.to_lowercase().as_str(),
            "exit" | "quit" | "q"
        ) {
            break;
        }

        if let Err(e) = generate_one(client, description, None, verbose) {
            eprintln!("{} {}", Style::new().red().apply_to("Error:"), e);
        }
        println!();
    }

    println!("{}", Style::new().green().apply_to("Goodbye!"));
    Ok(())
}

/// One full generation: request, extract, persist, report
fn generate_one(
    client: &Client,
    description: &str,
    output: Option<&Path>,
    verbose: bool,
) -> Result<()> {
    let blue = Style::new().blue();
    println!("{} {}", blue.apply_to("Description:"), description);
    if verbose {
        println!("{} {}", blue.apply_to("Model:"), client.model());
    }

    let started = Instant::now();
    let spinner = GenerationSpinner::start("Generating bundle...");
    let response = match client.stream_completion(SYSTEM_PROMPT, description) {
        Ok(text) => {
            spinner.stop();
            text
        }
        Err(e) => {
            spinner.stop();
            return Err(e);
        }
    };

    // Diagnostic artifacts land next to the bundle output
    let out_dir = output_dir(output);
    let extractor = Extractor::new(&out_dir);
    let bundle = extractor.extract(&response)?;

    let bundle_path = match output {
        Some(path) => path.to_path_buf(),
        None => writer::default_output_path(&bundle, chrono::Local::now())?,
    };
    writer::save_bundle(&bundle, &bundle_path)?;
    let reconstitutor_path = writer::write_reconstitutor(&out_dir)?;

    let green = Style::new().green();
    let bold = Style::new().bold();
    let elapsed = started.elapsed().as_secs();
    println!(
        "{}",
        green.apply_to(format!(
            "Bundle generated successfully in {}m {}s",
            elapsed / 60,
            elapsed % 60
        ))
    );
    println!("{} {}", bold.apply_to("Bundle:"), bundle_path.display());
    println!(
        "{} {}",
        bold.apply_to("Reconstitutor:"),
        reconstitutor_path.display()
    );

    print_bundle_stats(&bundle);

    println!("\n{}", bold.apply_to("To reconstitute the project:"));
    println!("  bundlesmith reconstitute {}", bundle_path.display());
    println!(
        "  python {} {}",
        reconstitutor_path.display(),
        bundle_path.display()
    );

    Ok(())
}

/// Directory that receives the bundle, the script and any debug artifacts
fn output_dir(output: Option<&Path>) -> PathBuf {
    output
        .and_then(Path::parent)
        .filter(|parent| !parent.as_os_str().is_empty())
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."))
}

fn print_bundle_stats(bundle: &Value) {
    let bold = Style::new().bold();
    println!("\n{}", bold.apply_to("Bundle statistics:"));

    if let Ok(name) = writer::bundle_name(bundle) {
        println!("  {} {}", bold.apply_to("Name:"), name);
    }
    if let Some(description) = bundle
        .pointer("/metadata/description")
        .and_then(Value::as_str)
    {
        println!("  {} {}", bold.apply_to("Description:"), description);
    }
    if let Some(files) = bundle.pointer("/structure/files").and_then(Value::as_object) {
        println!("  {} {}", bold.apply_to("Files:"), files.len());
    }
    if let Some(features) = bundle.get("features").and_then(Value::as_array) {
        let tags: Vec<&str> = features.iter().filter_map(Value::as_str).collect();
        println!("  {} {}", bold.apply_to("Features:"), tags.join(", "));
    }
}
