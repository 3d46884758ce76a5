//! Batch command - clean multiple report exports.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, error, warn};

use enrep_core::{read_grid, summarize, CleanResult, EncounterRecord, ReportCleaner};

use super::output::{format_summary, records_to_csv, OutputFormat};

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Input files or glob pattern
    #[arg(required = true)]
    input: String,

    /// Output directory for per-report cleaned tables
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Also write a per-file run report CSV
    #[arg(long)]
    report: bool,

    /// Also write a combined monthly summary across all reports
    #[arg(long)]
    monthly: bool,

    /// Continue on error
    #[arg(long)]
    continue_on_error: bool,
}

/// Result of cleaning a single report file.
struct BatchResult {
    path: PathBuf,
    records: usize,
    rows_dropped: usize,
    error: Option<String>,
    processing_time_ms: u64,
}

pub fn run(args: BatchArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    let config = super::load_config(config_path)?;

    // Expand glob pattern
    let files: Vec<PathBuf> = glob(&args.input)?
        .filter_map(|r| r.ok())
        .filter(|p| {
            let ext = p.extension().and_then(|e| e.to_str()).unwrap_or("");
            ext.eq_ignore_ascii_case("csv")
        })
        .collect();

    if files.is_empty() {
        anyhow::bail!("No matching report files found for pattern: {}", args.input);
    }

    println!("{} Found {} reports to clean", style("ℹ").blue(), files.len());

    if let Some(ref output_dir) = args.output_dir {
        fs::create_dir_all(output_dir)?;
    }

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} reports")
            .unwrap()
            .progress_chars("=>-"),
    );

    let cleaner = ReportCleaner::with_config(&config.extraction);
    let mut results = Vec::with_capacity(files.len());
    let mut all_records: Vec<EncounterRecord> = Vec::new();

    for path in files {
        let file_start = Instant::now();
        let outcome = clean_single_file(&path, &cleaner, args.output_dir.as_deref());
        let processing_time_ms = file_start.elapsed().as_millis() as u64;

        match outcome {
            Ok(result) => {
                all_records.extend(result.records.iter().cloned());
                results.push(BatchResult {
                    path,
                    records: result.records.len(),
                    rows_dropped: result.rows_dropped,
                    error: None,
                    processing_time_ms,
                });
            }
            Err(e) => {
                let error_msg = e.to_string();
                if args.continue_on_error {
                    warn!("Failed to clean {}: {}", path.display(), error_msg);
                    results.push(BatchResult {
                        path,
                        records: 0,
                        rows_dropped: 0,
                        error: Some(error_msg),
                        processing_time_ms,
                    });
                } else {
                    error!("Failed to clean {}: {}", path.display(), error_msg);
                    anyhow::bail!("Cleaning failed: {}", error_msg);
                }
            }
        }

        pb.inc(1);
    }

    pb.finish_with_message("Complete");

    // Write the run report
    if args.report {
        let report_path = output_path(&args.output_dir, "run_report.csv");
        write_run_report(&report_path, &results)?;
        println!(
            "{} Run report written to {}",
            style("✓").green(),
            report_path.display()
        );
    }

    // Write the combined monthly summary
    if args.monthly {
        let summary = summarize(&all_records, config.summary.charge_threshold);
        let summary_path = output_path(&args.output_dir, "monthly_summary.csv");
        fs::write(&summary_path, format_summary(&summary, OutputFormat::Csv)?)?;
        println!(
            "{} Combined monthly summary written to {}",
            style("✓").green(),
            summary_path.display()
        );
    }

    let successful = results.iter().filter(|r| r.error.is_none()).count();
    let failed: Vec<_> = results.iter().filter(|r| r.error.is_some()).collect();

    println!();
    println!(
        "{} Cleaned {} reports in {:?}",
        style("✓").green(),
        results.len(),
        start.elapsed()
    );
    println!(
        "   {} successful, {} failed",
        style(successful).green(),
        style(failed.len()).red()
    );

    if !failed.is_empty() {
        println!();
        println!("{}", style("Failed reports:").red());
        for result in &failed {
            println!(
                "  - {}: {}",
                result.path.display(),
                result.error.as_deref().unwrap_or("unknown error")
            );
        }
    }

    Ok(())
}

fn output_path(output_dir: &Option<PathBuf>, name: &str) -> PathBuf {
    output_dir
        .as_ref()
        .map(|d| d.join(name))
        .unwrap_or_else(|| PathBuf::from(name))
}

fn clean_single_file(
    path: &PathBuf,
    cleaner: &ReportCleaner,
    output_dir: Option<&std::path::Path>,
) -> anyhow::Result<CleanResult> {
    let grid = read_grid(path)?;
    let result = cleaner.clean(&grid);

    if let Some(output_dir) = output_dir {
        let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or("report");
        let output_path = output_dir.join(format!("{}_cleaned.csv", stem));
        fs::write(&output_path, records_to_csv(&result.records)?)?;
        debug!("Wrote cleaned table to {}", output_path.display());
    }

    Ok(result)
}

fn write_run_report(path: &PathBuf, results: &[BatchResult]) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record([
        "filename",
        "status",
        "records",
        "rows_dropped",
        "processing_time_ms",
        "error",
    ])?;

    for result in results {
        let filename = result
            .path
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("");

        if let Some(error) = &result.error {
            wtr.write_record([
                filename,
                "error",
                "",
                "",
                &result.processing_time_ms.to_string(),
                error,
            ])?;
        } else {
            wtr.write_record([
                filename,
                "success",
                &result.records.to_string(),
                &result.rows_dropped.to_string(),
                &result.processing_time_ms.to_string(),
                "",
            ])?;
        }
    }

    wtr.flush()?;
    Ok(())
}
