// SPDX-License-Identifier: MIT
//
// Locale-aware display formatting for amounts and dates. Pure functions,
// no state.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::types::LocaleConfig;

/// Format a monetary amount for display: two fixed decimals, locale digit
/// grouping, and optionally the currency symbol.
///
/// Unknown locales and currencies fall back to en-US grouping with the bare
/// currency code as a prefix; formatting never fails.
pub fn format_currency(amount: f64, locale: &LocaleConfig, with_symbol: bool) -> String {
    let (group_sep, decimal_sep) = separators(&locale.code);
    let digits = group_digits(amount, group_sep, decimal_sep);

    if with_symbol {
        format!("{}{}", currency_symbol(&locale.currency), digits)
    } else {
        digits
    }
}

/// Format a date-like string as `YYYY/M/D` with no zero padding.
///
/// Accepts RFC 3339 timestamps, `YYYY-MM-DD HH:MM:SS`, and bare `YYYY-MM-DD`
/// dates. Anything unparseable passes through unchanged — a bad date must
/// never abort a render.
pub fn format_date(value: &str) -> String {
    parse_date(value)
        .map(|d| {
            use chrono::Datelike;
            format!("{}/{}/{}", d.year(), d.month(), d.day())
        })
        .unwrap_or_else(|| value.to_string())
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.date_naive());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S") {
        return Some(dt.date());
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

/// Thousands and decimal separators for the handful of locale tags the
/// billing backend actually sends.
fn separators(locale_code: &str) -> (char, char) {
    let language = locale_code
        .split(['-', '_'])
        .next()
        .unwrap_or("")
        .to_ascii_lowercase();
    match language.as_str() {
        // Spanish-speaking markets on this platform group with commas, like
        // es-DO / es-US. European-style dot grouping is opt-in via de/fr.
        "de" => ('.', ','),
        "fr" => ('\u{202f}', ','),
        _ => (',', '.'),
    }
}

fn currency_symbol(currency: &str) -> String {
    match currency.to_ascii_uppercase().as_str() {
        "USD" => "$".into(),
        "DOP" => "RD$".into(),
        "EUR" => "€".into(),
        "GBP" => "£".into(),
        "MXN" => "MX$".into(),
        other => format!("{other} "),
    }
}

/// Render `amount` with two decimals, grouping integer digits in threes.
fn group_digits(amount: f64, group_sep: char, decimal_sep: char) -> String {
    let negative = amount.is_sign_negative() && amount != 0.0;
    let fixed = format!("{:.2}", amount.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3 + 4);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(group_sep);
        }
        grouped.push(ch);
    }

    let sign = if negative { "-" } else { "" };
    format!("{sign}{grouped}{decimal_sep}{frac_part}")
}
