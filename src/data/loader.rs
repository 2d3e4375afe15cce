//! Treasury curve loader: fetch every tenor, join on date, clean, rescale.

use chrono::NaiveDate;
use tracing::{debug, info};

use crate::data::fred::{FredCsvClient, SeriesSource};
use crate::domain::{PERCENT_PER_UNIT, TENOR_COUNT, Tenor, YieldCurveTable};
use crate::error::LoadError;

/// Incomplete rows are dropped unless the caller asks otherwise.
pub const DEFAULT_DROP_NA: bool = true;

/// Load the constant-maturity Treasury curve from FRED.
///
/// Columns follow `Tenor::ALL`; rows are ascending by date and values are
/// decimals (FRED percent / 100). With `drop_na`, only dates quoted for all
/// eleven tenors survive.
pub fn load_treasury_yield_curve(
    start: NaiveDate,
    end: NaiveDate,
    drop_na: bool,
) -> Result<YieldCurveTable, LoadError> {
    let client = FredCsvClient::new();
    load_treasury_yield_curve_from(&client, start, end, drop_na)
}

/// Same as [`load_treasury_yield_curve`], against any series source.
///
/// Tenors are fetched one at a time in column order. The first failure aborts
/// the load and is returned as-is.
pub fn load_treasury_yield_curve_from<S>(
    source: &S,
    start: NaiveDate,
    end: NaiveDate,
    drop_na: bool,
) -> Result<YieldCurveTable, LoadError>
where
    S: SeriesSource + ?Sized,
{
    let mut columns = Vec::with_capacity(TENOR_COUNT);
    for tenor in Tenor::ALL {
        let series = source.fetch_series(tenor.series_id(), start, end)?;
        debug!(tenor = tenor.label(), observations = series.len(), "fetched tenor");
        columns.push((tenor, series));
    }

    let joined = YieldCurveTable::from_series(columns);
    let joined_rows = joined.len();

    let table = if drop_na { joined.drop_incomplete() } else { joined };

    info!(
        %start,
        %end,
        rows = table.len(),
        dropped = joined_rows - table.len(),
        "loaded Treasury curve"
    );

    Ok(table.scaled_by(PERCENT_PER_UNIT))
}
