mod catalog;
mod generate;
mod manifest;

use anyhow::Result;
use clap::Parser;
use generate::GenerateSummary;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser)]
#[command(
    name = "xcassetgen",
    version,
    about = "Write Contents.json manifests for every .imageset folder in an asset catalog"
)]
struct Cli {
    /// Asset catalog root (the .xcassets directory)
    #[arg(default_value = "Assets.xcassets")]
    catalog_root: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if !cli.catalog_root.exists() {
        println!("No Assets");
        return Ok(());
    }

    let summary = generate::generate_manifests(&cli.catalog_root)?;
    println!("Done");
    print_generate_summary(&summary);

    Ok(())
}

fn print_generate_summary(summary: &GenerateSummary) {
    println!(
        "Generate summary: root={} sets={} skipped={} bytes={} duration={} warnings={}",
        summary.root.display(),
        summary.set_count,
        summary.skipped_entries,
        summary.bytes_written,
        fmt_duration(summary.elapsed),
        summary.warning_count,
    );
    for warning in &summary.warnings {
        println!("  warning: {}", warning);
    }
}

fn fmt_duration(d: Duration) -> String {
    let secs = d.as_secs();
    let h = secs / 3600;
    let m = (secs % 3600) / 60;
    let s = secs % 60;
    if h > 0 {
        format!("{:02}:{:02}:{:02}", h, m, s)
    } else {
        format!("{:02}:{:02}", m, s)
    }
}
