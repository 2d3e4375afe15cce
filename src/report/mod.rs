//! Reporting utilities: run summaries, tables and single-date curves.

pub mod format;

pub use format::*;
