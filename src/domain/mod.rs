//! Domain types used throughout the loader.
//!
//! This module defines:
//!
//! - the fixed tenor set and its FRED series ids (`Tenor`)
//! - per-tenor raw series (`YieldSeries`)
//! - the aligned curve table (`YieldCurveTable`, `CurveRow`)
//! - run configuration (`LoadConfig`)

pub mod types;

pub use types::*;
