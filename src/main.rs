mod logger;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use hol2ics_core::{convert_file, paths, ConvertOptions};

const VALIDATOR_URL: &str = "https://icalendar.org/validator.html";

#[derive(Parser, Debug)]
#[command(name = "hol2ics")]
#[command(about = "Convert an Outlook calendar file (.hol) to an iCalendar file (.ics)")]
struct Cli {
    /// Outlook calendar source file (.hol)
    source: PathBuf,

    /// Destination file (.ics), defaults to the source name with an .ics extension
    #[arg(long = "dest")]
    destination: Option<PathBuf>,
}

fn main() -> Result<()> {
    logger::init();
    let cli = Cli::parse();

    run(&cli.source, cli.destination.as_deref())
}

fn run(source: &Path, destination: Option<&Path>) -> Result<()> {
    let destination = paths::resolve_paths(source, destination)?;
    let options = ConvertOptions::load().context("Could not load hol2ics settings")?;

    println!(
        "Attempting to convert {} into {}",
        source.display(),
        destination.display()
    );

    let report = convert_file(source, &destination, &options).with_context(|| {
        format!(
            "Failed to convert {} into {}",
            source.display(),
            destination.display()
        )
    })?;

    tracing::info!(
        title = %report.title,
        events = report.event_count,
        destination = %report.destination.display(),
        "Conversion finished"
    );
    println!("You can try to validate the resultant file using this webform: {VALIDATOR_URL}");

    Ok(())
}
