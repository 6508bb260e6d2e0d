use std::ops::RangeInclusive;

use serde_json::Value;

use crate::model::{Coord, NewSchool, SchoolCandidate};

pub const LATITUDE_RANGE: RangeInclusive<f64> = -90.0..=90.0;
pub const LONGITUDE_RANGE: RangeInclusive<f64> = -180.0..=180.0;

/// Checks a registration candidate and returns the record to insert, with
/// `name` and `address` trimmed. `None` means the candidate is invalid.
pub fn validate_school(candidate: &SchoolCandidate) -> Option<NewSchool> {
    let name = non_blank(&candidate.name)?;
    let address = non_blank(&candidate.address)?;
    let latitude = in_range(&candidate.latitude, &LATITUDE_RANGE)?;
    let longitude = in_range(&candidate.longitude, &LONGITUDE_RANGE)?;

    Some(NewSchool {
        name: name.to_owned(),
        address: address.to_owned(),
        latitude,
        longitude,
    })
}

/// Parses the listing query coordinate. Both values must be present, start
/// with a number and fall inside the coordinate domains. Trailing text after
/// the number is ignored, so `"40abc"` reads as 40.
pub fn parse_coord(latitude: Option<&str>, longitude: Option<&str>) -> Option<Coord> {
    let lat = parse_in_range(latitude?, &LATITUDE_RANGE)?;
    let lon = parse_in_range(longitude?, &LONGITUDE_RANGE)?;

    Some(Coord::new(lat, lon))
}

fn non_blank(value: &Value) -> Option<&str> {
    let trimmed = value.as_str()?.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

fn in_range(value: &Value, range: &RangeInclusive<f64>) -> Option<f64> {
    value.as_f64().filter(|v| range.contains(v))
}

// Infinities never satisfy `contains`; "NaN" has no numeric prefix.
fn parse_in_range(raw: &str, range: &RangeInclusive<f64>) -> Option<f64> {
    leading_float(raw).filter(|v| range.contains(v))
}

/// Parses the longest decimal number at the start of `raw`, after leading
/// whitespace: optional sign, digits with an optional fraction, optional
/// exponent. `None` when no digit is found.
fn leading_float(raw: &str) -> Option<f64> {
    let s = raw.trim_start();
    let bytes = s.as_bytes();
    let digits = |from: usize| bytes[from..].iter().take_while(|b| b.is_ascii_digit()).count();

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));

    let int_digits = digits(end);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = digits(end + 1);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }

    if int_digits == 0 && frac_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_digits = digits(exp);
        if exp_digits > 0 {
            end = exp + exp_digits;
        }
    }

    s[..end].parse().ok()
}
