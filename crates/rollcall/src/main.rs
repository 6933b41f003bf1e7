use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use polars::prelude::*;
use rollcall_core::{
    extract_roster, normalize_punch_grid, summarize_attendance, weekday_count_matrix,
    weekday_resume_percent, PunchKind,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Attendance punch-log reporting", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Build the daily and per-staff attendance summaries from a punch log
    Report(ReportArgs),
    /// Normalize a raw punch sheet into the fixed day grid
    Normalize(NormalizeArgs),
}

#[derive(Args, Debug)]
struct ReportArgs {
    /// CSV export of the raw punch-log sheet
    #[arg(long)]
    log: PathBuf,

    /// CSV export of the staff-names sheet
    #[arg(long)]
    roster: PathBuf,

    /// Zero-based column of the names sheet that holds display names
    #[arg(long, default_value_t = 0)]
    roster_column: usize,

    /// Directory to write daily_summary.csv and staff_totals.csv into
    #[arg(long)]
    out_dir: Option<PathBuf>,

    /// Also print the per-weekday punch matrices and attendance percentages
    #[arg(long)]
    breakdown: bool,
}

#[derive(Args, Debug)]
struct NormalizeArgs {
    /// CSV export of the raw punch-log sheet
    #[arg(long)]
    log: PathBuf,

    /// Write the normalized grid to this file instead of printing it
    #[arg(long)]
    out: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Report(args) => handle_report(args),
        Command::Normalize(args) => handle_normalize(args),
    }
}

fn handle_report(args: ReportArgs) -> Result<()> {
    let log = read_sheet(&args.log)?;
    let names = read_sheet(&args.roster)?;

    let roster = extract_roster(&names, args.roster_column)
        .with_context(|| format!("extracting staff names from {}", args.roster.display()))?;
    let grid = normalize_punch_grid(&log)
        .with_context(|| format!("normalizing punch log {}", args.log.display()))?;
    let report = summarize_attendance(&grid, &roster).context("summarizing attendance")?;
    info!(staff = report.staff_totals.height(), "attendance summarized");

    if let Some(mismatch) = &report.roster_mismatch {
        println!(
            "Roster lists {} staff but the log has {} rows; reporting on the first {}.",
            mismatch.roster_count, mismatch.row_count, mismatch.used
        );
    }

    println!("Daily summary:\n{}", report.daily_summary);
    println!("Staff totals:\n{}", report.staff_totals);

    let breakdown = if args.breakdown {
        let resumes = weekday_count_matrix(&report.daily_summary, PunchKind::Resume)?;
        let exits = weekday_count_matrix(&report.daily_summary, PunchKind::Exit)?;
        let percent = weekday_resume_percent(&report.daily_summary, report.staff_totals.height())?;
        println!("Resume counts by weekday:\n{resumes}");
        println!("Exit counts by weekday:\n{exits}");
        println!("Attendance percent by weekday:\n{percent}");
        Some((resumes, exits, percent))
    } else {
        None
    };

    if let Some(dir) = &args.out_dir {
        fs::create_dir_all(dir)
            .with_context(|| format!("creating output directory {}", dir.display()))?;
        write_sheet(&report.daily_summary, &dir.join("daily_summary.csv"))?;
        write_sheet(&report.staff_totals, &dir.join("staff_totals.csv"))?;
        let mut written = 2;
        if let Some((resumes, exits, percent)) = &breakdown {
            write_sheet(resumes, &dir.join("resume_matrix.csv"))?;
            write_sheet(exits, &dir.join("exit_matrix.csv"))?;
            write_sheet(percent, &dir.join("weekday_percent.csv"))?;
            written += 3;
        }
        println!("Wrote {written} tables to {}.", dir.display());
    }

    Ok(())
}

fn handle_normalize(args: NormalizeArgs) -> Result<()> {
    let log = read_sheet(&args.log)?;
    let grid = normalize_punch_grid(&log)
        .with_context(|| format!("normalizing punch log {}", args.log.display()))?;
    info!(rows = grid.height(), "punch grid normalized");

    match &args.out {
        Some(path) => {
            write_sheet(&grid, path)?;
            println!("Wrote {} ({} staff rows).", path.display(), grid.height());
        }
        None => println!("{grid}"),
    }

    Ok(())
}

/// Reads a sheet exported as headerless CSV, keeping every cell as text
/// so punch columns are never coerced to numbers.
fn read_sheet(path: &Path) -> Result<DataFrame> {
    let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    CsvReadOptions::default()
        .with_has_header(false)
        .with_infer_schema_length(Some(0))
        .into_reader_with_file_handle(Cursor::new(bytes))
        .finish()
        .with_context(|| format!("parsing {} as CSV", path.display()))
}

fn write_sheet(frame: &DataFrame, path: &Path) -> Result<()> {
    let mut frame = frame.clone();
    let file = fs::File::create(path).with_context(|| format!("creating {}", path.display()))?;
    CsvWriter::new(file)
        .include_header(true)
        .finish(&mut frame)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}
