// Utility helpers for parsing and number formatting.
//
// This module centralizes the forgiving CSV field handling so the loader
// and projectors can assume clean, typed values.
use num_format::{Locale, ToFormattedString};

/// Parse a string-like value into `f64` while being forgiving about
/// formatting issues that are common in CSV exports (commas, spaces, text).
///
/// - Trims whitespace.
/// - Rejects values that contain alphabetic characters.
/// - Strips thousands separators like `","` before parsing.
/// - Returns `None` for anything that cannot be safely parsed.
pub fn parse_f64_safe(s: Option<&str>) -> Option<f64> {
    let s = s?.trim();
    if s.is_empty() {
        return None;
    }
    if s.chars().any(|c| c.is_ascii_alphabetic()) {
        return None;
    }
    let s = s.replace(",", "");
    s.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Observed worker count. Missing, non-numeric and negative values count
/// as zero; the flag reports whether coercion happened on a non-blank field.
pub fn parse_obs_value(s: Option<&str>) -> (f64, bool) {
    match parse_f64_safe(s) {
        Some(v) if v >= 0.0 => (v, false),
        Some(_) => (0.0, true),
        None => {
            let blank = s.map(|v| v.trim().is_empty()).unwrap_or(true);
            (0.0, !blank)
        }
    }
}

/// Parse the year out of a period field. Only the leading digit run is
/// used, so `2019` and `2019-Q3` both resolve to 2019.
pub fn parse_period(s: Option<&str>) -> Option<i32> {
    let s = s?.trim();
    let end = s
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit())
        .map(|(i, _)| i)
        .unwrap_or(s.len());
    if end == 0 {
        return None;
    }
    s[..end].parse::<i32>().ok()
}

/// Trimmed, non-empty text or `None`.
pub fn non_empty(s: Option<&str>) -> Option<&str> {
    s.map(str::trim).filter(|v| !v.is_empty())
}

pub fn format_number(n: f64, decimals: usize) -> String {
    // Fixed decimals plus locale-aware thousands separators (`1,234.50`).
    let neg = n.is_sign_negative() && n != 0.0;
    let s = format!("{:.*}", decimals, n.abs());
    let mut parts = s.split('.');
    let int_part = parts.next().unwrap_or("0");
    let frac_part = parts.next();
    let int_val: i64 = int_part.parse().unwrap_or(0);
    let mut res = int_val.to_formatted_string(&Locale::en);
    if let Some(frac) = frac_part {
        res.push('.');
        res.push_str(frac);
    }
    if neg {
        format!("-{}", res)
    } else {
        res
    }
}

pub fn format_int<T>(n: T) -> String
where
    T: ToFormattedString,
{
    n.to_formatted_string(&Locale::en)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn obs_value_coercion() {
        assert_eq!(parse_obs_value(Some("1,234")), (1234.0, false));
        assert_eq!(parse_obs_value(Some(" 50 ")), (50.0, false));
        assert_eq!(parse_obs_value(Some("")), (0.0, false));
        assert_eq!(parse_obs_value(None), (0.0, false));
        assert_eq!(parse_obs_value(Some("n/a")), (0.0, true));
        assert_eq!(parse_obs_value(Some("-3")), (0.0, true));
    }

    #[test]
    fn period_uses_leading_digits() {
        assert_eq!(parse_period(Some("2021")), Some(2021));
        assert_eq!(parse_period(Some(" 2019-Q3")), Some(2019));
        assert_eq!(parse_period(Some("FY2020")), None);
        assert_eq!(parse_period(Some("")), None);
        assert_eq!(parse_period(None), None);
    }

    #[test]
    fn number_formatting() {
        assert_eq!(format_number(1234567.891, 2), "1,234,567.89");
        assert_eq!(format_number(-12.5, 1), "-12.5");
        assert_eq!(format_number(42.0, 0), "42");
        assert_eq!(format_int(9855u64), "9,855");
    }
}
