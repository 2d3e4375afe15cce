//! Shared domain types.
//!
//! These types are intentionally kept small and serializable so they can be:
//!
//! - assembled in-memory by the loader
//! - exported to CSV/JSON
//! - rendered by the report and plot modules

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::Serialize;

/// Number of tenors on the constant-maturity curve.
pub const TENOR_COUNT: usize = 11;

/// Source values are quoted in percent; the table stores decimals.
pub const PERCENT_PER_UNIT: f64 = 100.0;

/// A constant-maturity point on the Treasury curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Tenor {
    M1,
    M3,
    M6,
    Y1,
    Y2,
    Y3,
    Y5,
    Y7,
    Y10,
    Y20,
    Y30,
}

impl Tenor {
    /// All tenors in column order.
    pub const ALL: [Tenor; TENOR_COUNT] = [
        Tenor::M1,
        Tenor::M3,
        Tenor::M6,
        Tenor::Y1,
        Tenor::Y2,
        Tenor::Y3,
        Tenor::Y5,
        Tenor::Y7,
        Tenor::Y10,
        Tenor::Y20,
        Tenor::Y30,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Tenor::M1 => "1M",
            Tenor::M3 => "3M",
            Tenor::M6 => "6M",
            Tenor::Y1 => "1Y",
            Tenor::Y2 => "2Y",
            Tenor::Y3 => "3Y",
            Tenor::Y5 => "5Y",
            Tenor::Y7 => "7Y",
            Tenor::Y10 => "10Y",
            Tenor::Y20 => "20Y",
            Tenor::Y30 => "30Y",
        }
    }

    /// FRED series id for the constant-maturity yield at this tenor.
    pub fn series_id(self) -> &'static str {
        match self {
            Tenor::M1 => "DGS1MO",
            Tenor::M3 => "DGS3MO",
            Tenor::M6 => "DGS6MO",
            Tenor::Y1 => "DGS1",
            Tenor::Y2 => "DGS2",
            Tenor::Y3 => "DGS3",
            Tenor::Y5 => "DGS5",
            Tenor::Y7 => "DGS7",
            Tenor::Y10 => "DGS10",
            Tenor::Y20 => "DGS20",
            Tenor::Y30 => "DGS30",
        }
    }

    /// Maturity in years (used as the x-axis when plotting a curve).
    pub fn years(self) -> f64 {
        match self {
            Tenor::M1 => 1.0 / 12.0,
            Tenor::M3 => 0.25,
            Tenor::M6 => 0.5,
            Tenor::Y1 => 1.0,
            Tenor::Y2 => 2.0,
            Tenor::Y3 => 3.0,
            Tenor::Y5 => 5.0,
            Tenor::Y7 => 7.0,
            Tenor::Y10 => 10.0,
            Tenor::Y20 => 20.0,
            Tenor::Y30 => 30.0,
        }
    }

    /// Column position in `Tenor::ALL`.
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Tenor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Tenor {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Tenor::ALL
            .into_iter()
            .find(|t| t.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| format!("Unknown tenor '{wanted}' (expected one of 1M..30Y)."))
    }
}

/// One FRED series as returned by the CSV endpoint (percent units).
///
/// `None` marks a date FRED lists without a published value.
#[derive(Debug, Clone, PartialEq)]
pub struct YieldSeries {
    pub series_id: String,
    pub points: BTreeMap<NaiveDate, Option<f64>>,
}

impl YieldSeries {
    pub fn new(series_id: impl Into<String>) -> Self {
        Self {
            series_id: series_id.into(),
            points: BTreeMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn get(&self, date: NaiveDate) -> Option<f64> {
        self.points.get(&date).copied().flatten()
    }

    pub fn first_date(&self) -> Option<NaiveDate> {
        self.points.keys().next().copied()
    }

    pub fn last_date(&self) -> Option<NaiveDate> {
        self.points.keys().next_back().copied()
    }
}

/// One dated row of the curve table; `values` follows `Tenor::ALL`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CurveRow {
    pub date: NaiveDate,
    pub values: [Option<f64>; TENOR_COUNT],
}

impl CurveRow {
    pub fn is_complete(&self) -> bool {
        self.values.iter().all(Option::is_some)
    }

    pub fn get(&self, tenor: Tenor) -> Option<f64> {
        self.values[tenor.index()]
    }
}

/// Date-indexed table of yields, one column per tenor.
///
/// Rows are kept in ascending date order and columns always follow
/// `Tenor::ALL`, regardless of the order series were supplied in.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct YieldCurveTable {
    rows: Vec<CurveRow>,
}

impl YieldCurveTable {
    /// Union-join per-tenor series on date.
    ///
    /// A date present in only some series gets `None` for the others. A tenor
    /// never supplied stays `None` in every row.
    pub fn from_series<I>(series: I) -> Self
    where
        I: IntoIterator<Item = (Tenor, YieldSeries)>,
    {
        let columns: Vec<(Tenor, YieldSeries)> = series.into_iter().collect();

        let dates: BTreeSet<NaiveDate> = columns
            .iter()
            .flat_map(|(_, s)| s.points.keys().copied())
            .collect();

        let rows = dates
            .into_iter()
            .map(|date| {
                let mut values = [None; TENOR_COUNT];
                for (tenor, s) in &columns {
                    values[tenor.index()] = s.get(date);
                }
                CurveRow { date, values }
            })
            .collect();

        Self { rows }
    }

    /// Build a table from rows; rows are re-sorted by date.
    pub fn from_rows(mut rows: Vec<CurveRow>) -> Self {
        rows.sort_by_key(|r| r.date);
        Self { rows }
    }

    /// Remove every row with at least one missing tenor.
    pub fn drop_incomplete(mut self) -> Self {
        self.rows.retain(CurveRow::is_complete);
        self
    }

    /// Divide every present value by `divisor`.
    pub fn scaled_by(mut self, divisor: f64) -> Self {
        for row in &mut self.rows {
            for v in row.values.iter_mut().flatten() {
                *v /= divisor;
            }
        }
        self
    }

    pub fn columns(&self) -> [&'static str; TENOR_COUNT] {
        Tenor::ALL.map(Tenor::label)
    }

    pub fn rows(&self) -> &[CurveRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn dates(&self) -> Vec<NaiveDate> {
        self.rows.iter().map(|r| r.date).collect()
    }

    pub fn date_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        Some((self.rows.first()?.date, self.rows.last()?.date))
    }

    pub fn row(&self, date: NaiveDate) -> Option<&CurveRow> {
        self.rows
            .binary_search_by_key(&date, |r| r.date)
            .ok()
            .map(|i| &self.rows[i])
    }

    pub fn get(&self, date: NaiveDate, tenor: Tenor) -> Option<f64> {
        self.row(date).and_then(|r| r.get(tenor))
    }

    pub fn column(&self, tenor: Tenor) -> Vec<(NaiveDate, Option<f64>)> {
        self.rows.iter().map(|r| (r.date, r.get(tenor))).collect()
    }

    /// The curve on `date` as `(tenor, value)` pairs, skipping missing tenors.
    pub fn curve_on(&self, date: NaiveDate) -> Option<Vec<(Tenor, f64)>> {
        let row = self.row(date)?;
        Some(
            Tenor::ALL
                .into_iter()
                .filter_map(|t| row.get(t).map(|v| (t, v)))
                .collect(),
        )
    }

    /// Most recent row with every tenor present.
    pub fn latest_complete(&self) -> Option<&CurveRow> {
        self.rows.iter().rev().find(|r| r.is_complete())
    }

    /// Count of missing values per tenor, in column order.
    pub fn missing_counts(&self) -> [usize; TENOR_COUNT] {
        let mut counts = [0; TENOR_COUNT];
        for row in &self.rows {
            for (count, v) in counts.iter_mut().zip(row.values.iter()) {
                if v.is_none() {
                    *count += 1;
                }
            }
        }
        counts
    }
}

/// A full run's configuration as understood by the pipeline.
///
/// This is derived from CLI flags (plus defaults).
#[derive(Debug, Clone)]
pub struct LoadConfig {
    pub start: NaiveDate,
    pub end: NaiveDate,
    /// Drop rows with any missing tenor.
    pub drop_na: bool,

    /// Number of most recent rows to print (0 prints none).
    pub rows: usize,
    /// Print only this tenor's column instead of the full table.
    pub tenor: Option<Tenor>,
    /// Date to show the curve for; latest complete row when `None`.
    pub curve_date: Option<NaiveDate>,
    pub plot_width: usize,
    pub plot_height: usize,

    pub export_csv: Option<PathBuf>,
    pub export_json: Option<PathBuf>,
}

impl LoadConfig {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            start,
            end,
            drop_na: crate::data::DEFAULT_DROP_NA,
            rows: 10,
            tenor: None,
            curve_date: None,
            plot_width: 80,
            plot_height: 20,
            export_csv: None,
            export_json: None,
        }
    }
}
