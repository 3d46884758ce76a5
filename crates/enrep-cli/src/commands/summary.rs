//! Summary command - monthly claims summary for one report.

use std::fs;
use std::path::PathBuf;

use clap::Args;
use console::style;
use rust_decimal::Decimal;
use tracing::info;

use enrep_core::{read_grid, summarize, ReportCleaner};

use super::clean::{FillScopeArg, IdSourceArg};
use super::output::{format_summary, parse_records_csv, OutputFormat};

/// Arguments for the summary command.
#[derive(Args)]
pub struct SummaryArgs {
    /// Input report (CSV export), or a cleaned table with --cleaned
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Input is an already-cleaned table, not a raw report
    #[arg(long)]
    cleaned: bool,

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

pub fn run(args: SummaryArgs, config_path: Option<&str>) -> anyhow::Result<()> {
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

    let records = if args.cleaned {
        info!("Reading cleaned table: {}", args.input.display());
        parse_records_csv(&fs::read_to_string(&args.input)?)?
    } else {
        info!("Cleaning report: {}", args.input.display());
        let grid = read_grid(&args.input)?;
        ReportCleaner::with_config(&config.extraction).clean(&grid).records
    };

    let summary = summarize(&records, config.summary.charge_threshold);
    let output = format_summary(&summary, args.format)?;

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} Monthly summary ({} months) written to {}",
            style("✓").green(),
            summary.len(),
            output_path.display()
        );
    } else {
        print!("{}", output);
    }

    Ok(())
}
