//! Data access: the FRED CSV client and the Treasury curve loader.

pub mod fred;
pub mod loader;

pub use fred::{FredCsvClient, SeriesSource, parse_series_csv};
pub use loader::{DEFAULT_DROP_NA, load_treasury_yield_curve, load_treasury_yield_curve_from};
