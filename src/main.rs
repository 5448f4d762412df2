use anyhow::{Context, Result};
use gaussian_fit::ui::cli::drivers::InquireDriver;
use gaussian_fit::ui::cli::wizard::prompt_task;
use gaussian_fit::ui::types::build::build_task;

fn main() -> Result<()> {
    let driver = InquireDriver;
    let choice = prompt_task(&driver)?;

    let mut task = build_task(choice).context("could not set up the fit")?;
    let report = task.run().context("fit failed")?;

    println!("{}", report.model.describe());
    println!(
        "Histogram{}:",
        if report.histogram.is_normalized() { " (normalized)" } else { "" }
    );
    for bin in report.histogram.bins() {
        println!("  {bin}");
    }
    println!("Density curve: {} points", report.curve.len());
    if let Some(path) = &report.exported_to {
        println!("Density curve written to {}", path.display());
    }
    Ok(())
}
