//! `cardiag check` command - Diagnose vehicle records

use console::style;
use miette::{IntoDiagnostic, Result};
use std::path::PathBuf;

use crate::cli::output::{print_outcome, RecordReport};
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::loader::{expand_paths, load_vehicle};
use crate::core::Config;
use crate::engine::DiagnosticEngine;

#[derive(clap::Args, Debug)]
pub struct CheckArgs {
    /// Record files or directories to check (default: configured record, then SampleCar.yaml)
    #[arg()]
    pub paths: Vec<PathBuf>,

    /// Output format
    #[arg(long, short = 'f', value_enum)]
    pub format: Option<OutputFormat>,

    /// Continue with remaining records after a failing one
    #[arg(long)]
    pub keep_going: bool,

    /// Show summary only, don't show individual findings
    #[arg(long)]
    pub summary: bool,
}

/// Check statistics
#[derive(Default)]
struct CheckStats {
    records_checked: usize,
    records_passed: usize,
    records_failed: usize,
    load_errors: usize,
}

pub fn run(args: CheckArgs, global: &GlobalOpts) -> Result<()> {
    let config = Config::load();
    let format = args
        .format
        .or_else(|| {
            config
                .default_format
                .as_deref()
                .and_then(OutputFormat::from_config)
        })
        .unwrap_or_default();
    let keep_going = args.keep_going || config.keep_going();

    let paths = if args.paths.is_empty() {
        vec![config.record()]
    } else {
        expand_paths(&args.paths)
    };
    if paths.is_empty() {
        return Err(miette::miette!(
            code = "cardiag::check::no_records",
            help = "record files end in .yaml, .yml or .json",
            "No record files found in {}",
            args.paths
                .iter()
                .map(|p| p.display().to_string())
                .collect::<Vec<_>>()
                .join(", ")
        ));
    }
    tracing::debug!(records = paths.len(), ?format, keep_going, "starting check");

    let engine = DiagnosticEngine::new();
    let mut stats = CheckStats::default();
    let mut reports = Vec::new();
    let text = format == OutputFormat::Text;
    let detail = text && !args.summary;

    if text && !global.quiet && paths.len() > 1 {
        println!(
            "{} Diagnosing {} record(s)...\n",
            style("→").blue(),
            paths.len()
        );
    }

    for path in &paths {
        stats.records_checked += 1;

        let vehicle = match load_vehicle(path) {
            Ok(vehicle) => vehicle,
            Err(e) => {
                stats.records_failed += 1;
                stats.load_errors += 1;
                tracing::warn!(path = %path.display(), error = %e, "failed to load record");
                if detail {
                    println!("{} {} - could not be loaded", style("✗").red(), path.display());
                    println!("{:?}", miette::Report::new(e));
                } else if !text {
                    reports.push(RecordReport::failed(path, &e));
                }
                if !keep_going {
                    break;
                }
                continue;
            }
        };

        let outcome = engine.diagnose(&vehicle);
        tracing::info!(path = %path.display(), stage = ?outcome.stage(), "diagnosed");

        let passed = outcome.is_success();
        if passed {
            stats.records_passed += 1;
        } else {
            stats.records_failed += 1;
        }

        if detail {
            print_outcome(path, &outcome);
        } else if !text {
            reports.push(RecordReport::diagnosed(path, outcome));
        }

        if !passed && !keep_going {
            break;
        }
    }

    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&reports).into_diagnostic()?;
            println!("{}", json);
        }
        OutputFormat::Yaml => {
            let yaml = serde_yml::to_string(&reports).into_diagnostic()?;
            print!("{}", yaml);
        }
        OutputFormat::Text => {
            if !global.quiet && (args.summary || stats.records_checked > 1) {
                print_summary(&stats);
            }
        }
    }

    if stats.records_failed > 0 {
        if stats.records_failed == 1 {
            Err(miette::miette!("Diagnostics failed: 1 record has findings or errors"))
        } else {
            Err(miette::miette!(
                "Diagnostics failed: {} records have findings or errors",
                stats.records_failed
            ))
        }
    } else {
        Ok(())
    }
}

fn print_summary(stats: &CheckStats) {
    println!();
    println!("{}", style("─".repeat(60)).dim());
    println!("{}", style("Diagnostic Summary").bold());
    println!("{}", style("─".repeat(60)).dim());
    println!("  Records checked: {}", style(stats.records_checked).cyan());
    println!("  Records passed:  {}", style(stats.records_passed).green());
    println!("  Records failed:  {}", style(stats.records_failed).red());
    if stats.load_errors > 0 {
        println!("  Load errors:     {}", style(stats.load_errors).red());
    }
    println!();
}
