//! Sweep annual income and write the take-home breakdown as TSV
//!
//! One row per income sample, no header. Columns: income, health, pension,
//! health+pension, unemployment, basic deduction, employment deduction,
//! taxable income, national tax, surtax, resident tax, take-home, total
//! burden, effective rate %, marginal rate %.

use std::fs::File;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use takehome_jp::{
    projection::DEFAULT_OUTPUT_PATH, Assumptions, GradeTable, RowWriter, RunConfig, SweepEngine,
};

#[derive(Debug, Parser)]
#[command(about = "Japanese take-home pay across a range of annual incomes")]
struct Args {
    /// JSON run configuration; missing fields use defaults
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output TSV path
    #[arg(long, default_value = DEFAULT_OUTPUT_PATH)]
    output: PathBuf,

    /// First annual income sample, in 10,000 JPY
    #[arg(long)]
    start: Option<f64>,

    /// Last annual income sample, in 10,000 JPY
    #[arg(long)]
    end: Option<f64>,

    /// Under 40 or 65 and over: no nursing-care addition
    #[arg(long)]
    no_nursing_care: bool,

    /// Not enrolled in employees' health insurance and pension
    #[arg(long)]
    no_social_insurance: bool,

    /// Not enrolled in unemployment insurance
    #[arg(long)]
    no_employment_insurance: bool,

    /// Bear both the employer and employee halves of social insurance
    #[arg(long)]
    owner: bool,

    /// Health insurance grade table CSV (standard_amount,upper_threshold)
    #[arg(long)]
    health_table: Option<PathBuf>,

    /// Pension grade table CSV (standard_amount,upper_threshold)
    #[arg(long)]
    pension_table: Option<PathBuf>,
}

fn load_table(path: Option<&PathBuf>) -> Result<Option<GradeTable>> {
    path.map(|p| {
        let file = File::open(p).with_context(|| format!("Failed to open {}", p.display()))?;
        GradeTable::from_csv_reader(file).with_context(|| format!("Failed to load {}", p.display()))
    })
    .transpose()
}

fn build_config(args: &Args) -> Result<RunConfig> {
    let mut config = match &args.config {
        Some(path) => RunConfig::from_file(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => RunConfig::default(),
    };

    if let Some(start) = args.start {
        config.range.start = start;
    }
    if let Some(end) = args.end {
        config.range.end = end;
    }
    if args.no_nursing_care {
        config.flags.nursing_care = false;
    }
    if args.no_social_insurance {
        config.flags.social_insurance = false;
    }
    if args.no_employment_insurance {
        config.flags.employment_insurance = false;
    }
    if args.owner {
        config.flags.owner = true;
    }

    config.validate().context("Invalid run configuration")?;
    Ok(config)
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let start = Instant::now();

    let config = build_config(&args)?;
    let assumptions = Assumptions::with_grade_tables(
        load_table(args.health_table.as_ref())?,
        load_table(args.pension_table.as_ref())?,
    );
    let engine = SweepEngine::new(assumptions, config);

    let mut writer = RowWriter::create(&args.output)
        .with_context(|| format!("Failed to create {}", args.output.display()))?;
    let summary = engine.run_into(&mut writer).context("Failed to write sweep output")?;
    writer.finish().context("Failed to flush sweep output")?;

    println!("Wrote {} rows to {}", summary.rows, args.output.display());
    if let Some(last) = summary.last {
        println!(
            "  Income {}: take-home {}, burden {} ({}%)",
            last.income, last.take_home, last.total_burden, last.effective_rate
        );
    }
    println!("Total time: {:?}", start.elapsed());
    Ok(())
}
