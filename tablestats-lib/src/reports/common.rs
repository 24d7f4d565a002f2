//! Common utilities shared across report generators.

use super::ReportOptions;
use crate::ordering::OrderingError;
use crate::stats::{OpaqueNumber, Snapshot, TableStatistics};

const LOG_TARGET: &str = "   reports";

/// Format a float with the fewest digits that read back to the same value.
///
/// Whole numbers keep a trailing `.0`, so `100.0`, `-1.0` and `0.05` print as
/// written. Magnitudes below `1e-3` or from `1e7` up switch to scientific
/// notation with an upper-case `E`, as in `5.0E-4` and `1.25E7`. Non-finite
/// values print as `NaN`, `Infinity` and `-Infinity`.
#[must_use]
pub fn format_shortest(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }

    if value.is_infinite() {
        let sign = if value.is_sign_negative() { "-" } else { "" };
        return format!("{sign}Infinity");
    }

    let magnitude = value.abs();
    if magnitude == 0.0 || (1e-3..1e7).contains(&magnitude) {
        return format!("{value:?}");
    }

    let scientific = format!("{value:e}");
    match scientific.split_once('e') {
        Some((mantissa, exponent)) if mantissa.contains('.') => format!("{mantissa}E{exponent}"),
        Some((mantissa, exponent)) => format!("{mantissa}.0E{exponent}"),
        None => scientific,
    }
}

/// Round to two decimals, then format the result with [`format_shortest`].
#[must_use]
pub fn format_hundredths(value: f64) -> String {
    format_shortest((value * 100.0).round() / 100.0)
}

/// Format an optional opaque number, using `n/a` when absent.
pub fn format_opaque(value: Option<&OpaqueNumber>) -> String {
    value.map_or_else(|| "n/a".to_string(), ToString::to_string)
}

/// Format an optional opaque number with a fixed number of decimals.
pub fn format_opaque_fixed(value: Option<&OpaqueNumber>, precision: usize) -> String {
    value.map_or_else(|| "n/a".to_string(), |v| format!("{:.precision$}", v.as_f64()))
}

/// Flatten, order and truncate the tables of a snapshot for the flat sorted layout.
///
/// Nothing is truncated when `options.top` is zero or at least the number of tables.
pub fn select_tables<'a>(snapshot: &'a Snapshot, options: &ReportOptions) -> Result<Vec<&'a TableStatistics>, OrderingError> {
    let mut tables: Vec<_> = snapshot.tables().collect();
    options.ordering().sort(&mut tables)?;

    if options.top > 0 && options.top < tables.len() {
        log::debug!(target: LOG_TARGET, "Keeping the top {} of {} tables", options.top, tables.len());
        tables.truncate(options.top);
    }

    Ok(tables)
}
