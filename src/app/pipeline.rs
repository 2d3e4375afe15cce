//! Shared "load" workflow used by every loading subcommand.
//!
//! FRED fetch -> join -> clean -> rescale, then the presentation layer picks
//! what to show. Keeping it here lets the commands focus on printing.

use chrono::NaiveDate;

use crate::data::{FredCsvClient, SeriesSource, load_treasury_yield_curve_from};
use crate::domain::{LoadConfig, Tenor, YieldCurveTable};
use crate::error::AppError;

/// Load the table for `config` from FRED.
pub fn run_load(config: &LoadConfig) -> Result<YieldCurveTable, AppError> {
    let client = FredCsvClient::new();
    run_load_with(&client, config)
}

/// Load the table for `config` from any series source.
pub fn run_load_with<S>(source: &S, config: &LoadConfig) -> Result<YieldCurveTable, AppError>
where
    S: SeriesSource + ?Sized,
{
    let table = load_treasury_yield_curve_from(source, config.start, config.end, config.drop_na)?;
    Ok(table)
}

/// Pick the curve to display: `config.curve_date` if set, else the latest
/// complete row.
pub fn select_curve(
    table: &YieldCurveTable,
    config: &LoadConfig,
) -> Result<(NaiveDate, Vec<(Tenor, f64)>), AppError> {
    let date = match config.curve_date {
        Some(date) => date,
        None => table
            .latest_complete()
            .map(|row| row.date)
            .ok_or_else(|| AppError::new(2, "No date with every tenor quoted in the requested window."))?,
    };

    let curve = table
        .curve_on(date)
        .ok_or_else(|| AppError::new(2, format!("No curve for {date} in the requested window.")))?;

    if curve.is_empty() {
        return Err(AppError::new(2, format!("No tenor quoted on {date}.")));
    }

    Ok((date, curve))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::YieldSeries;
    use crate::error::LoadError;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn source(id: &str, _: NaiveDate, _: NaiveDate) -> Result<YieldSeries, LoadError> {
        let mut series = YieldSeries::new(id);
        series.points.insert(d(2020, 1, 2), Some(1.5));
        let last = if id == "DGS20" { None } else { Some(1.6) };
        series.points.insert(d(2020, 1, 3), last);
        Ok(series)
    }

    #[test]
    fn latest_complete_row_is_the_default_curve() {
        let mut config = LoadConfig::new(d(2020, 1, 1), d(2020, 1, 10));
        config.drop_na = false;
        let table = run_load_with(&source, &config).unwrap();

        let (date, curve) = select_curve(&table, &config).unwrap();
        assert_eq!(date, d(2020, 1, 2));
        assert_eq!(curve.len(), Tenor::ALL.len());
        assert_eq!(curve[0], (Tenor::M1, 1.5 / 100.0));
    }

    #[test]
    fn explicit_date_may_skip_missing_tenors() {
        let mut config = LoadConfig::new(d(2020, 1, 1), d(2020, 1, 10));
        config.drop_na = false;
        config.curve_date = Some(d(2020, 1, 3));
        let table = run_load_with(&source, &config).unwrap();

        let (_, curve) = select_curve(&table, &config).unwrap();
        assert!(curve.iter().all(|(t, _)| *t != Tenor::Y20));
        assert_eq!(curve.len(), Tenor::ALL.len() - 1);
    }

    #[test]
    fn unknown_date_is_a_usage_error() {
        let mut config = LoadConfig::new(d(2020, 1, 1), d(2020, 1, 10));
        config.curve_date = Some(d(2020, 1, 4));
        let table = run_load_with(&source, &config).unwrap();

        let err = select_curve(&table, &config).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn load_failures_map_to_data_exit_code() {
        let failing = |id: &str, _: NaiveDate, _: NaiveDate| -> Result<YieldSeries, LoadError> {
            Err(LoadError::network(id, "timed out"))
        };
        let config = LoadConfig::new(d(2020, 1, 1), d(2020, 1, 10));

        let err = run_load_with(&failing, &config).unwrap_err();
        assert_eq!(err.exit_code(), 4);
        assert!(err.to_string().contains("DGS1MO"));
    }
}
