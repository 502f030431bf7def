//! Field validation rules shared by every entity constructor.
//!
//! Each check either returns the accepted value or the first violated rule as an
//! [`Error`]. Entities chain these in field order, so the first failing check
//! decides which error the caller sees.

use crate::errors::{Error, Result};
use std::fmt::Display;
use std::ops::RangeInclusive;
use tracing::debug;

/// Minimum length for name, brand and color strings.
pub const MIN_TEXT_LEN: usize = 2;
/// Maximum length for name, brand and color strings.
pub const MAX_TEXT_LEN: usize = 30;

/// Requires a string to be present and within `MIN_TEXT_LEN..=MAX_TEXT_LEN` UTF-16 code units.
///
/// Characters outside the Basic Multilingual Plane, such as emoji, count twice.
///
/// # Errors
/// `MissingValue` when absent, `InvalidValue` when the length is out of bounds.
pub fn required_text(field: &'static str, value: Option<String>) -> Result<String> {
    let value = required(field, value)?;
    let len = value.encode_utf16().count();
    if !(MIN_TEXT_LEN..=MAX_TEXT_LEN).contains(&len) {
        return Err(reject(field, value));
    }
    Ok(value)
}

/// Requires an integer to lie inside an inclusive range.
pub fn in_range(field: &'static str, value: i32, range: RangeInclusive<i32>) -> Result<i32> {
    if range.contains(&value) {
        Ok(value)
    } else {
        Err(reject(field, value))
    }
}

/// Requires a real number to lie inside an inclusive range. NaN never does.
pub fn in_range_f64(field: &'static str, value: f64, range: RangeInclusive<f64>) -> Result<f64> {
    if range.contains(&value) {
        Ok(value)
    } else {
        Err(reject(field, value))
    }
}

/// Requires a finite, strictly positive amount.
pub fn positive(field: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(reject(field, value))
    }
}

/// Accepts an absent value, otherwise requires a case-insensitive match against `allowed`.
///
/// The caller's spelling is kept as-is.
pub fn optional_one_of(
    field: &'static str,
    value: Option<String>,
    allowed: &[&str],
) -> Result<Option<String>> {
    match value {
        None => Ok(None),
        Some(value) => matches_one_of(field, value, allowed).map(Some),
    }
}

/// Like [`optional_one_of`] but an absent value is a `MissingValue` error.
pub fn required_one_of(
    field: &'static str,
    value: Option<String>,
    allowed: &[&str],
) -> Result<String> {
    let value = required(field, value)?;
    matches_one_of(field, value, allowed)
}

fn required(field: &'static str, value: Option<String>) -> Result<String> {
    value.ok_or_else(|| {
        debug!(field, "required value is missing");
        Error::MissingValue { field }
    })
}

fn matches_one_of(field: &'static str, value: String, allowed: &[&str]) -> Result<String> {
    if allowed.iter().any(|candidate| equals_ignore_case(candidate, &value)) {
        Ok(value)
    } else {
        Err(reject(field, value))
    }
}

/// Case-insensitive equality that also folds non-ASCII letters, e.g. the
/// Kelvin sign `U+212A` matches `k`.
pub fn equals_ignore_case(a: &str, b: &str) -> bool {
    a.encode_utf16().count() == b.encode_utf16().count()
        && a.chars().count() == b.chars().count()
        && a.chars().zip(b.chars()).all(|(x, y)| chars_equal_ignore_case(x, y))
}

fn chars_equal_ignore_case(x: char, y: char) -> bool {
    x == y || x.to_uppercase().eq(y.to_uppercase()) || fold_case(x).eq(fold_case(y))
}

fn fold_case(c: char) -> impl Iterator<Item = char> {
    c.to_uppercase().flat_map(char::to_lowercase)
}

fn reject(field: &'static str, value: impl Display) -> Error {
    debug!(field, %value, "value rejected");
    Error::invalid(field, value)
}
