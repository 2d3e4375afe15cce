//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - loads `.env` and installs logging
//! - parses CLI arguments
//! - fetches and assembles the FRED curve table
//! - prints reports/plots
//! - writes optional exports

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::{Command, CurveArgs, LoadArgs, WindowArgs};
use crate::domain::LoadConfig;
use crate::error::AppError;

pub mod pipeline;

/// Entry point for the `ust` binary.
pub fn run() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    let cli = crate::cli::Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Command::Load(args) => handle_load(args),
        Command::Curve(args) => handle_curve(args),
        Command::Tenors => {
            print!("{}", crate::report::format_tenors());
            Ok(())
        }
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    // Keeps an already-installed subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn handle_load(args: LoadArgs) -> Result<(), AppError> {
    let config = load_config_from_args(&args);
    let table = pipeline::run_load(&config)?;

    print!("{}", crate::report::format_run_summary(&table, &config));
    if config.rows > 0 {
        match config.tenor {
            Some(tenor) => print!("{}", crate::report::format_column(&table, tenor, config.rows)),
            None => print!("{}", crate::report::format_table(&table, config.rows)),
        }
    }

    if let Some(path) = &config.export_csv {
        crate::io::write_table_csv(path, &table)?;
    }
    if let Some(path) = &config.export_json {
        crate::io::write_table_json(path, &table)?;
    }

    Ok(())
}

fn handle_curve(args: CurveArgs) -> Result<(), AppError> {
    let config = curve_config_from_args(&args);
    let table = pipeline::run_load(&config)?;
    let (date, curve) = pipeline::select_curve(&table, &config)?;

    print!("{}", crate::report::format_curve(date, &curve));
    println!();
    print!(
        "{}",
        crate::plot::render_curve_plot(&curve, config.plot_width, config.plot_height)
    );

    Ok(())
}

fn window_config(window: &WindowArgs) -> LoadConfig {
    let mut config = LoadConfig::new(window.start, window.end);
    config.drop_na = !window.keep_na;
    config
}

pub fn load_config_from_args(args: &LoadArgs) -> LoadConfig {
    LoadConfig {
        rows: args.rows,
        tenor: args.tenor,
        export_csv: args.export.clone(),
        export_json: args.export_json.clone(),
        ..window_config(&args.window)
    }
}

pub fn curve_config_from_args(args: &CurveArgs) -> LoadConfig {
    LoadConfig {
        curve_date: args.date,
        plot_width: args.width,
        plot_height: args.height,
        ..window_config(&args.window)
    }
}
