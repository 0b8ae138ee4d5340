//! Formatting utilities used for CLI output and derived metrics.

use unicode_width::UnicodeWidthStr;

/// Above this magnitude an f64 has no hundredths left to round.
const ROUND2_LIMIT: f64 = 1e15;

/// Round half away from zero to two decimals.
pub fn round2(value: f64) -> f64 {
    if !value.is_finite() || value.abs() >= ROUND2_LIMIT {
        return value;
    }
    (value * 100.0).round() / 100.0
}

/// Pad to `width` terminal columns (emoji count as two).
pub fn pad_right(s: &str, width: usize) -> String {
    let pad = width.saturating_sub(UnicodeWidthStr::width(s));
    format!("{}{}", s, " ".repeat(pad))
}

/// Human form of a measured quantity: integers without decimals,
/// everything else with at most two.
///
/// 5.0 → "5", 12.5 → "12.5", 6.666 → "6.67"
pub fn fmt_quantity(value: f64) -> String {
    let r = round2(value);
    if r.fract() == 0.0 {
        format!("{:.0}", r)
    } else {
        let s = format!("{:.2}", r);
        s.trim_end_matches('0').to_string()
    }
}

/// Derived metrics always show two decimals (6.00, 20.00).
pub fn fmt_metric(value: f64) -> String {
    format!("{:.2}", value)
}
