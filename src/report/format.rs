//! Formatted terminal output for loaded curve tables.
//!
//! We keep formatting code in one place so:
//! - the loader stays free of presentation concerns
//! - output changes are localized (important for snapshot tests)

use chrono::NaiveDate;

use crate::domain::{LoadConfig, Tenor, YieldCurveTable};

/// Format the run summary (window, policy, rows kept, missing counts).
pub fn format_run_summary(table: &YieldCurveTable, config: &LoadConfig) -> String {
    let mut out = String::new();

    out.push_str("=== ust - US Treasury constant-maturity curve (FRED) ===\n");
    out.push_str(&format!("Window: {} .. {}\n", config.start, config.end));
    out.push_str(&format!(
        "Missing rows: {}\n",
        if config.drop_na { "dropped" } else { "kept" }
    ));

    match table.date_range() {
        Some((first, last)) => out.push_str(&format!("Rows: {} | dates=[{first}, {last}]\n", table.len())),
        None => out.push_str("Rows: 0\n"),
    }

    let missing = table.missing_counts();
    if missing.iter().any(|&n| n > 0) {
        let parts: Vec<String> = Tenor::ALL
            .iter()
            .zip(missing)
            .filter(|(_, n)| *n > 0)
            .map(|(t, n)| format!("{t}={n}"))
            .collect();
        out.push_str(&format!("Missing values: {}\n", parts.join(" ")));
    }
    out.push('\n');

    out
}

/// Format the last `max_rows` rows of the table in percent.
pub fn format_table(table: &YieldCurveTable, max_rows: usize) -> String {
    let mut out = String::new();

    out.push_str(&format!("{:<10}", "date"));
    for label in table.columns() {
        out.push_str(&format!(" {label:>6}"));
    }
    out.push('\n');

    let skip = table.len().saturating_sub(max_rows);
    if skip > 0 {
        out.push_str(&format!("... ({skip} earlier rows)\n"));
    }

    for row in table.rows().iter().skip(skip) {
        out.push_str(&row.date.to_string());
        for v in row.values {
            out.push_str(&format!(" {:>6}", fmt_pct(v)));
        }
        out.push('\n');
    }

    out
}

/// Format the last `max_rows` values of one tenor's column in percent.
pub fn format_column(table: &YieldCurveTable, tenor: Tenor, max_rows: usize) -> String {
    let mut out = String::new();
    out.push_str(&format!("{:<10} {:>6}  ({})\n", "date", tenor.label(), tenor.series_id()));

    let column = table.column(tenor);
    let skip = column.len().saturating_sub(max_rows);
    if skip > 0 {
        out.push_str(&format!("... ({skip} earlier rows)\n"));
    }
    for (date, v) in column.into_iter().skip(skip) {
        out.push_str(&format!("{date} {:>6}\n", fmt_pct(v)));
    }

    out
}

/// Format a single date's curve, one tenor per line.
pub fn format_curve(date: NaiveDate, curve: &[(Tenor, f64)]) -> String {
    let mut out = String::new();
    out.push_str(&format!("Curve on {date}:\n"));
    for (tenor, v) in curve {
        out.push_str(&format!(
            "  {:>3} ({:<6}) {:>7.4} ({:.2}%)\n",
            tenor.label(),
            tenor.series_id(),
            v,
            v * 100.0
        ));
    }
    out
}

/// Format the fixed tenor -> FRED series table.
pub fn format_tenors() -> String {
    let mut out = String::new();
    out.push_str("tenor  series  years\n");
    for t in Tenor::ALL {
        out.push_str(&format!("{:<6} {:<7} {:.3}\n", t.label(), t.series_id(), t.years()));
    }
    out
}

fn fmt_pct(v: Option<f64>) -> String {
    match v {
        Some(x) => format!("{:.2}", x * 100.0),
        None => "-".to_string(),
    }
}
