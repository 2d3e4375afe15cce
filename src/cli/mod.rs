//! Command-line parsing for the FRED Treasury curve loader.
//!
//! The goal of this module is to keep **argument parsing** and **command dispatch**
//! separate from the loader itself.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};

use crate::domain::Tenor;

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "ust", version, about = "US Treasury constant-maturity curves from FRED")]
pub struct Cli {
    /// Log fetch progress (overridden by RUST_LOG).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Load all tenors for a window, print a summary and table, optionally export.
    Load(LoadArgs),
    /// Load a window and show the curve for one date with an ASCII plot.
    Curve(CurveArgs),
    /// List the tenors and their FRED series ids.
    Tenors,
}

/// Date window and missing-row policy shared by every loading command.
#[derive(Debug, Args, Clone)]
pub struct WindowArgs {
    /// First date of the window (YYYY-MM-DD).
    #[arg(long, value_parser = parse_date)]
    pub start: NaiveDate,

    /// Last date of the window (YYYY-MM-DD).
    #[arg(long, value_parser = parse_date)]
    pub end: NaiveDate,

    /// Keep rows where some tenor has no quote (dropped by default).
    #[arg(long)]
    pub keep_na: bool,
}

#[derive(Debug, Args, Clone)]
pub struct LoadArgs {
    #[command(flatten)]
    pub window: WindowArgs,

    /// Number of most recent rows to print.
    #[arg(long, default_value_t = 10)]
    pub rows: usize,

    /// Print only this tenor's column (e.g. 10Y).
    #[arg(long)]
    pub tenor: Option<Tenor>,

    /// Export the table to CSV.
    #[arg(long)]
    pub export: Option<PathBuf>,

    /// Export the table to JSON.
    #[arg(long = "export-json")]
    pub export_json: Option<PathBuf>,
}

#[derive(Debug, Args, Clone)]
pub struct CurveArgs {
    #[command(flatten)]
    pub window: WindowArgs,

    /// Date to show (defaults to the latest row with every tenor quoted).
    #[arg(long, value_parser = parse_date)]
    pub date: Option<NaiveDate>,

    /// Plot width (columns).
    #[arg(long, default_value_t = 80)]
    pub width: usize,

    /// Plot height (rows).
    #[arg(long, default_value_t = 20)]
    pub height: usize,
}

fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|e| format!("expected YYYY-MM-DD: {e}"))
}
