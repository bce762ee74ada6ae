use crate::stats::Table;
use std::fmt::Write;

/// Renders the final report: `{key=min/mean/max, ...}` with keys in byte-wise
/// ascending order. No trailing newline; the caller owns stream conventions.
pub fn render(table: &Table) -> String {
    let mut stations: Vec<_> = table.iter().collect();
    stations.sort_by(|a, b| a.0.cmp(b.0));

    let mut out = String::with_capacity(2 + stations.len() * 24);
    out.push('{');
    for (i, (station, stats)) in stations.into_iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        let _ = write!(out, "{}=", String::from_utf8_lossy(station));
        push_value(&mut out, stats.min);
        let _ = write!(out, "/{:.1}/", round_to_tenths(stats.mean()));
        push_value(&mut out, stats.max);
    }
    out.push('}');
    out
}

/// Natural decimal form of a measurement, with at least one fractional digit
/// so an integral value prints as `5.0` rather than `5`.
fn push_value(out: &mut String, value: f64) {
    if value == value.trunc() {
        let _ = write!(out, "{value:.1}");
    } else {
        let _ = write!(out, "{value}");
    }
}

/// One-decimal rounding for the mean, halves away from zero.
fn round_to_tenths(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
