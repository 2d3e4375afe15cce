//! FRED CSV integration for constant-maturity Treasury series.
//!
//! One request per series against the public `fredgraph.csv` endpoint; no API
//! key is needed. Values come back in percent and are returned untouched.

use chrono::NaiveDate;
use reqwest::blocking::Client;
use tracing::debug;

use crate::domain::YieldSeries;
use crate::error::LoadError;

const BASE_URL: &str = "https://fred.stlouisfed.org/graph/fredgraph.csv";

/// Header names FRED has used for the date column.
const DATE_COLUMNS: [&str; 2] = ["DATE", "observation_date"];

/// Anything that can produce one raw FRED series for a date window.
///
/// `FredCsvClient` is the real implementation; closures work too, which keeps
/// loader tests off the network.
pub trait SeriesSource {
    fn fetch_series(
        &self,
        series_id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<YieldSeries, LoadError>;
}

impl<F> SeriesSource for F
where
    F: Fn(&str, NaiveDate, NaiveDate) -> Result<YieldSeries, LoadError>,
{
    fn fetch_series(
        &self,
        series_id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<YieldSeries, LoadError> {
        self(series_id, start, end)
    }
}

/// Blocking client for FRED's graph CSV endpoint.
pub struct FredCsvClient {
    client: Client,
    base_url: String,
}

impl FredCsvClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: BASE_URL.to_string(),
        }
    }

    #[cfg(test)]
    fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::builder().no_proxy().build().unwrap(),
            base_url: base_url.into(),
        }
    }
}

impl Default for FredCsvClient {
    fn default() -> Self {
        Self::new()
    }
}

impl SeriesSource for FredCsvClient {
    fn fetch_series(
        &self,
        series_id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<YieldSeries, LoadError> {
        let cosd = start.format("%Y-%m-%d").to_string();
        let coed = end.format("%Y-%m-%d").to_string();
        debug!(series_id, %cosd, %coed, "requesting FRED CSV");

        let resp = self
            .client
            .get(&self.base_url)
            .query(&[("id", series_id), ("cosd", cosd.as_str()), ("coed", coed.as_str())])
            .send()
            .map_err(|e| LoadError::network(series_id, e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(LoadError::network(series_id, format!("status {status}")));
        }

        let body = resp
            .text()
            .map_err(|e| LoadError::network(series_id, format!("failed to read body: {e}")))?;

        let series = parse_series_csv(series_id, &body)?;
        debug!(
            series_id,
            observations = series.len(),
            first = ?series.first_date(),
            last = ?series.last_date(),
            "parsed FRED series"
        );
        Ok(series)
    }
}

/// Parse a `fredgraph.csv` body into a date-ordered series.
///
/// The header must carry a date column and a value column named exactly
/// `series_id`. FRED's `.` placeholder (and empty/NA cells) become `None`.
pub fn parse_series_csv(series_id: &str, body: &str) -> Result<YieldSeries, LoadError> {
    if body.trim().is_empty() {
        return Err(LoadError::parse(series_id, "empty response body"));
    }

    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(body.as_bytes());

    let headers = reader
        .headers()
        .map_err(|e| LoadError::parse(series_id, format!("failed to read CSV headers: {e}")))?
        .clone();

    let date_idx = headers
        .iter()
        .position(|h| DATE_COLUMNS.contains(&h))
        .ok_or_else(|| LoadError::parse(series_id, "missing DATE column"))?;
    let value_idx = headers
        .iter()
        .position(|h| h == series_id)
        .ok_or_else(|| LoadError::parse(series_id, format!("missing {series_id} column")))?;

    let mut series = YieldSeries::new(series_id);

    for (idx, result) in reader.records().enumerate() {
        // records() starts after the header; lines are 1-based.
        let line = idx + 2;
        let record = result.map_err(|e| LoadError::parse(series_id, format!("line {line}: {e}")))?;

        let raw_date = record.get(date_idx).unwrap_or("");
        let date = NaiveDate::parse_from_str(raw_date, "%Y-%m-%d")
            .map_err(|e| {
                LoadError::parse(series_id, format!("line {line}: invalid date '{raw_date}': {e}"))
            })?;

        let raw_value = record.get(value_idx).unwrap_or("");
        let value = parse_value(raw_value)
            .map_err(|msg| LoadError::parse(series_id, format!("line {line}: {msg}")))?;

        if series.points.insert(date, value).is_some() {
            return Err(LoadError::parse(series_id, format!("line {line}: duplicate date {date}")));
        }
    }

    Ok(series)
}

fn parse_value(raw: &str) -> Result<Option<f64>, String> {
    let trimmed = raw.trim();
    if is_missing(trimmed) {
        return Ok(None);
    }
    let v = trimmed
        .parse::<f64>()
        .map_err(|e| format!("invalid value '{trimmed}': {e}"))?;
    if v.is_finite() {
        Ok(Some(v))
    } else {
        Err(format!("non-finite value '{trimmed}'"))
    }
}

fn is_missing(cell: &str) -> bool {
    cell.is_empty() || cell == "." || cell.eq_ignore_ascii_case("na") || cell.eq_ignore_ascii_case("nan")
}
