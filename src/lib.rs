//! `ust-curves` library crate.
//!
//! Loads US Treasury constant-maturity yields (1M..30Y) from FRED's CSV
//! endpoint into a single date-indexed table of decimal yields.
//!
//! The binary (`ust`) is a thin wrapper around this library so that the loader
//! is testable without spawning processes or touching the network.

pub mod app;
pub mod cli;
pub mod data;
pub mod domain;
pub mod error;
pub mod io;
pub mod plot;
pub mod report;

pub use data::{DEFAULT_DROP_NA, load_treasury_yield_curve, load_treasury_yield_curve_from};
pub use domain::{CurveRow, Tenor, YieldCurveTable, YieldSeries};
pub use error::LoadError;
