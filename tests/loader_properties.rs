//! Property tests for the curve loader.
//!
//! Uses proptest with an in-memory series source to verify:
//! 1. Columns are always the eleven tenors in fixed order
//! 2. With drop_na, every surviving row is complete (and exactly the common dates survive)
//! 3. Every value equals the raw source value / 100
//! 4. Loading twice with the same inputs gives the same table
//! 5. A one-day window yields at most one row

use std::collections::{BTreeMap, BTreeSet, HashMap};

use chrono::{Days, NaiveDate};
use proptest::prelude::*;
use ust_curves::{LoadError, Tenor, YieldSeries, load_treasury_yield_curve_from};

fn base_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2020, 1, 1).unwrap()
}

// Strategies (proptest)

fn arb_percent() -> impl Strategy<Value = f64> {
    (0.0..8.0_f64).prop_map(|p| (p * 100.0).round() / 100.0)
}

/// One raw series per tenor: day offset -> value (None = FRED's `.`).
fn arb_raw_curve() -> impl Strategy<Value = Vec<BTreeMap<u64, Option<f64>>>> {
    prop::collection::vec(
        prop::collection::btree_map(0u64..15, prop::option::weighted(0.9, arb_percent()), 0..12),
        Tenor::ALL.len(),
    )
}

fn to_series(raw: &[BTreeMap<u64, Option<f64>>]) -> HashMap<&'static str, YieldSeries> {
    Tenor::ALL
        .iter()
        .zip(raw)
        .map(|(tenor, points)| {
            let mut series = YieldSeries::new(tenor.series_id());
            for (&offset, &value) in points {
                series.points.insert(base_date() + Days::new(offset), value);
            }
            (tenor.series_id(), series)
        })
        .collect()
}

/// Serve the fixture, honouring the requested window the way FRED does.
fn windowed<'a>(
    data: &'a HashMap<&'static str, YieldSeries>,
) -> impl Fn(&str, NaiveDate, NaiveDate) -> Result<YieldSeries, LoadError> + 'a {
    move |id: &str, start: NaiveDate, end: NaiveDate| -> Result<YieldSeries, LoadError> {
        let full = data
            .get(id)
            .ok_or_else(|| LoadError::network(id, "unknown series"))?;
        let mut series = YieldSeries::new(id);
        series.points = full.points.range(start..=end).map(|(d, v)| (*d, *v)).collect();
        Ok(series)
    }
}

fn full_window() -> (NaiveDate, NaiveDate) {
    (base_date(), base_date() + Days::new(30))
}

proptest! {
    #[test]
    fn columns_are_the_fixed_tenors(raw in arb_raw_curve(), drop_na in any::<bool>()) {
        let data = to_series(&raw);
        let (start, end) = full_window();
        let table = load_treasury_yield_curve_from(&windowed(&data), start, end, drop_na).unwrap();

        prop_assert_eq!(
            table.columns().to_vec(),
            vec!["1M", "3M", "6M", "1Y", "2Y", "3Y", "5Y", "7Y", "10Y", "20Y", "30Y"]
        );
        let dates = table.dates();
        prop_assert!(dates.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn drop_na_keeps_exactly_the_fully_quoted_dates(raw in arb_raw_curve()) {
        let data = to_series(&raw);
        let (start, end) = full_window();
        let table = load_treasury_yield_curve_from(&windowed(&data), start, end, true).unwrap();

        prop_assert!(table.rows().iter().all(|r| r.is_complete()));

        let all_dates: BTreeSet<NaiveDate> =
            data.values().flat_map(|s| s.points.keys().copied()).collect();
        let expected: Vec<NaiveDate> = all_dates
            .into_iter()
            .filter(|d| data.values().all(|s| s.get(*d).is_some()))
            .collect();
        prop_assert_eq!(table.dates(), expected);
    }

    #[test]
    fn values_are_raw_percent_over_one_hundred(raw in arb_raw_curve()) {
        let data = to_series(&raw);
        let (start, end) = full_window();
        let table = load_treasury_yield_curve_from(&windowed(&data), start, end, false).unwrap();

        for row in table.rows() {
            for tenor in Tenor::ALL {
                let source = data[tenor.series_id()].get(row.date);
                prop_assert_eq!(row.get(tenor), source.map(|v| v / 100.0));
            }
        }

        let union: BTreeSet<NaiveDate> = data.values().flat_map(|s| s.points.keys().copied()).collect();
        prop_assert_eq!(table.len(), union.len());
    }

    #[test]
    fn identical_inputs_give_identical_tables(raw in arb_raw_curve(), drop_na in any::<bool>()) {
        let data = to_series(&raw);
        let (start, end) = full_window();
        let first = load_treasury_yield_curve_from(&windowed(&data), start, end, drop_na).unwrap();
        let second = load_treasury_yield_curve_from(&windowed(&data), start, end, drop_na).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn single_day_window_yields_at_most_one_row(
        raw in arb_raw_curve(),
        offset in 0u64..15,
        drop_na in any::<bool>(),
    ) {
        let data = to_series(&raw);
        let day = base_date() + Days::new(offset);
        let table = load_treasury_yield_curve_from(&windowed(&data), day, day, drop_na).unwrap();

        prop_assert!(table.len() <= 1);
        if let Some(row) = table.rows().first() {
            prop_assert_eq!(row.date, day);
        }
    }
}

#[test]
fn failing_tenor_fails_the_whole_load() {
    let raw = vec![BTreeMap::from([(0u64, Some(1.5))]); Tenor::ALL.len()];
    let data = to_series(&raw);
    let inner = windowed(&data);
    let source = |id: &str, start: NaiveDate, end: NaiveDate| -> Result<YieldSeries, LoadError> {
        if id == Tenor::Y7.series_id() {
            return Err(LoadError::network(id, "simulated outage"));
        }
        inner(id, start, end)
    };

    let (start, end) = full_window();
    let err = load_treasury_yield_curve_from(&source, start, end, true).unwrap_err();
    assert_eq!(err, LoadError::network("DGS7", "simulated outage"));
}

#[test]
fn missing_short_tenor_keeps_marker_in_that_column_only() {
    // Older windows predate the 1M bill series.
    let mut raw = vec![BTreeMap::from([(0u64, Some(6.5)), (1, Some(6.4))]); Tenor::ALL.len()];
    raw[0].clear();
    let data = to_series(&raw);

    let (start, end) = full_window();
    let kept = load_treasury_yield_curve_from(&windowed(&data), start, end, false).unwrap();
    assert_eq!(kept.len(), 2);
    for row in kept.rows() {
        assert_eq!(row.get(Tenor::M1), None);
        assert!(Tenor::ALL[1..].iter().all(|t| row.get(*t).is_some()));
    }

    let dropped = load_treasury_yield_curve_from(&windowed(&data), start, end, true).unwrap();
    assert!(dropped.is_empty());
}
