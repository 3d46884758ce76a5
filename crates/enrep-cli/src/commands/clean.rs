//! Clean command - extract the structured encounter table from one report.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use rust_decimal::Decimal;
use tracing::{debug, info};

use enrep_core::{read_grid, EncounterRecord, FillScope, IdSource, ReportCleaner, summarize};

use super::output::{format_records, format_summary, OutputFormat};

/// Arguments for the clean command.
#[derive(Args)]
pub struct CleanArgs {
    /// Input report (CSV export)
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "csv")]
    format: OutputFormat,

    /// Also write the monthly claims summary CSV to this path
    #[arg(long)]
    summary: Option<PathBuf>,

    /// Print the first N cleaned rows to the terminal
    #[arg(long)]
    preview: Option<usize>,

    /// Identifier extraction strategy
    #[arg(long, value_enum)]
    id_source: Option<IdSourceArg>,

    /// Forward-fill scope
    #[arg(long, value_enum)]
    fill: Option<FillScopeArg>,

    /// Charge threshold for the monthly summary
    #[arg(long)]
    threshold: Option<Decimal>,
}

/// Identifier extraction strategy flag.
#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum IdSourceArg {
    /// Second column, digits only
    Pinned,
    /// First numeric token anywhere in the row
    Scanned,
}

impl From<IdSourceArg> for IdSource {
    fn from(arg: IdSourceArg) -> Self {
        match arg {
            IdSourceArg::Pinned => IdSource::PositionPinned,
            IdSourceArg::Scanned => IdSource::PatternScanned,
        }
    }
}

/// Forward-fill scope flag.
#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum FillScopeArg {
    /// Carry id/provider fill across status blocks
    AcrossBlocks,
    /// Reset fill at each status change
    PerBlock,
}

impl From<FillScopeArg> for FillScope {
    fn from(arg: FillScopeArg) -> Self {
        match arg {
            FillScopeArg::AcrossBlocks => FillScope::AcrossBlocks,
            FillScopeArg::PerBlock => FillScope::PerBlock,
        }
    }
}

pub fn run(args: CleanArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    let mut config = super::load_config(config_path)?;
    if let Some(id_source) = args.id_source {
        config.extraction.id_source = id_source.into();
    }
    if let Some(fill) = args.fill {
        config.extraction.fill_scope = fill.into();
    }
    if let Some(threshold) = args.threshold {
        config.summary.charge_threshold = threshold;
    }

    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    info!("Cleaning report: {}", args.input.display());

    let grid = read_grid(&args.input)?;
    let cleaner = ReportCleaner::with_config(&config.extraction);
    let result = cleaner.clean(&grid);

    for warning in &result.warnings {
        eprintln!("{} {}", style("!").yellow(), warning);
    }

    let output = format_records(&result.records, args.format)?;
    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} Cleaned table ({} records) written to {}",
            style("✓").green(),
            result.records.len(),
            output_path.display()
        );
    } else {
        print!("{}", output);
    }

    if let Some(summary_path) = &args.summary {
        let summary = summarize(&result.records, config.summary.charge_threshold);
        fs::write(summary_path, format_summary(&summary, OutputFormat::Csv)?)?;
        println!(
            "{} Monthly summary ({} months) written to {}",
            style("✓").green(),
            summary.len(),
            summary_path.display()
        );
    }

    if let Some(n) = args.preview {
        print_preview(&result.records, n);
    }

    debug!(
        "Scanned {} rows, dropped {} dateless, total time {:?}",
        result.rows_scanned,
        result.rows_dropped,
        start.elapsed()
    );

    Ok(())
}

/// Print the first `n` cleaned rows as a styled terminal table.
fn print_preview(records: &[EncounterRecord], n: usize) {
    println!();
    println!("{}", style("Structured Encounter Data (Cleaned)").bold());
    println!(
        "{}",
        style(format!(
            "{:<15} {:<13} {:<24} {:<11} {:<9} {:<9} {:>10}",
            "Status", "Encounter ID", "Rendering Provider", "Svc Date", "Diag 1", "Diag 2", "Charges"
        ))
        .dim()
    );

    for record in records.iter().take(n) {
        println!(
            "{:<15} {:<13} {:<24} {:<11} {:<9} {:<9} {:>10}",
            record.status,
            record.encounter_id,
            record.rendering_provider,
            record.service_date,
            record.diagnosis1,
            record.diagnosis2,
            record.charge
        );
    }

    if records.len() > n {
        println!("{}", style(format!("... {} more rows", records.len() - n)).dim());
    }
}
