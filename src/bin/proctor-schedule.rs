//! Proctor schedule CLI.
//!
//! Reads a TOML input document, runs the generator and optimizer, and
//! prints the resulting schedule.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use proctor_schedule::ingest::load_request;
use proctor_schedule::presenter::SchedulePresenter;
use proctor_schedule::scheduler::{single_shift_proctors, ScheduleKpi};
use proctor_schedule::ScheduleError;

#[derive(Parser)]
#[command(name = "proctor-schedule")]
#[command(about = "Assign proctors to lab sessions for a work week")]
struct Cli {
    /// Input document (TOML)
    input: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Write the schedule to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Emit the generator's draft instead of the refined schedule
    #[arg(long)]
    draft: bool,

    /// Append a coverage and hours summary (text format only)
    #[arg(long)]
    summary: bool,

    /// Enable verbose output
    #[arg(long, short)]
    verbose: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let request = match load_request(&cli.input) {
        Ok(request) => request,
        Err(ScheduleError::ValidationFailed { errors }) => {
            eprintln!("Input validation failed:");
            for e in &errors {
                eprintln!("  - {e}");
            }
            std::process::exit(1);
        }
        Err(e) => {
            return Err(e).with_context(|| format!("loading {}", cli.input.display()));
        }
    };
    info!(
        proctors = request.proctors.len(),
        sessions = request.sessions.len(),
        "Input loaded"
    );

    let outcome = request.run().context("scheduling failed")?;
    let schedule = if cli.draft {
        &outcome.draft
    } else {
        &outcome.refined
    };

    let presenter = SchedulePresenter::new();
    let rendered = match cli.format {
        OutputFormat::Json => serde_json::to_string_pretty(schedule)?,
        OutputFormat::Text => {
            let mut text = presenter.format_schedule(schedule);
            if cli.summary {
                let kpi = ScheduleKpi::calculate(schedule);
                text.push_str("\n\n");
                text.push_str(&presenter.format_summary(&kpi, request.sessions.len()));
                for p in single_shift_proctors(&request.proctors, &request.config) {
                    text.push_str(&format!(
                        "  {}'s {} hours fit in a single shift\n",
                        p.name, p.max_weekly_hours
                    ));
                }
                let unassigned = kpi.unassigned(&request.proctors);
                if !unassigned.is_empty() {
                    text.push_str(&format!("  Unassigned: {}\n", unassigned.join(", ")));
                }
            }
            text
        }
    };

    match &cli.output {
        Some(path) => {
            std::fs::write(path, &rendered)
                .with_context(|| format!("writing {}", path.display()))?;
            info!(path = %path.display(), "Schedule written");
        }
        None => println!("{rendered}"),
    }

    Ok(())
}
