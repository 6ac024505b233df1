//! Reconstitute command implementation
//!
//! Expands a bundle JSON file into a project directory, mirroring the
//! behavior of the emitted `reconstitutor.py`.

use console::Style;

use crate::bundle::{Bundle, materialize};
use crate::cli::ReconstituteArgs;
use crate::error::Result;

/// Run reconstitute command
pub fn run(args: ReconstituteArgs) -> Result<()> {
    let bundle = Bundle::load(&args.bundle)?;
    let report = materialize::materialize(&bundle, args.dest.as_deref(), chrono::Local::now())?;

    let green = Style::new().green();
    let bold = Style::new().bold();
    println!(
        "{}",
        green.apply_to(format!(
            "Project created in {}",
            report.project_dir.display()
        ))
    );
    println!(
        "  {} {} files, requirements.txt, README.md",
        bold.apply_to("Written:"),
        report.files_written
    );

    println!("\n{}", bold.apply_to("To run the application:"));
    println!("  cd {}", report.project_dir.display());
    println!("  pip install -r requirements.txt");
    println!("  python app.py");

    Ok(())
}
