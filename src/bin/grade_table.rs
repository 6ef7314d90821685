//! Write grades, standardized amounts and monthly premiums for monthly
//! compensation from 1 to 150 (10,000 JPY) in steps of 0.1

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use takehome_jp::{projection::grade_report, Assumptions, InsuranceFlags};

#[derive(Debug, Parser)]
#[command(about = "Social insurance grades and premiums by monthly compensation")]
struct Args {
    /// Output TSV path
    #[arg(long, default_value = "grades.txt")]
    output: PathBuf,

    /// Under 40 or 65 and over: no nursing-care addition
    #[arg(long)]
    no_nursing_care: bool,

    /// Bear both the employer and employee halves
    #[arg(long)]
    owner: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let flags = InsuranceFlags {
        nursing_care: !args.no_nursing_care,
        owner: args.owner,
        ..InsuranceFlags::default()
    };
    let rows = grade_report(&Assumptions::default(), &flags, 10, 1500);
    info!("Computed {} grade rows", rows.len());

    let mut writer = csv::WriterBuilder::new()
        .delimiter(b'\t')
        .terminator(csv::Terminator::Any(b'\n'))
        .from_path(&args.output)
        .with_context(|| format!("Failed to create {}", args.output.display()))?;
    for row in &rows {
        writer.serialize(row)?;
    }
    writer.flush()?;

    println!("Wrote {} rows to {}", rows.len(), args.output.display());
    Ok(())
}
