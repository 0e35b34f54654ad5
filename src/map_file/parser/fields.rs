//! Feld-Parsing: zerlegt einzelne Zeilen eines Form-Blocks.

use super::super::{FIELD_ORDER, SIDES};
use crate::core::{Color, MapFileError, MAX_SIDES};

/// Prüft das Schlüsselwort einer Zeile und liefert die restlichen Tokens.
pub(super) fn split_field<'a>(
    line: &'a str,
    expected: &'static str,
    line_no: usize,
) -> Result<Vec<&'a str>, MapFileError> {
    let mut tokens = line.split_whitespace();
    let key = tokens.next().unwrap_or_default();

    if key == expected {
        return Ok(tokens.collect());
    }
    if key.is_empty() || FIELD_ORDER.contains(&key) {
        Err(MapFileError::UnexpectedField {
            line: line_no,
            expected,
            found: key.to_string(),
        })
    } else {
        Err(MapFileError::UnsupportedProperty {
            line: line_no,
            token: key.to_string(),
        })
    }
}

/// Endliche Gleitkommazahl
pub(super) fn parse_f64(value: &str, line: usize) -> Result<f64, MapFileError> {
    value
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| MapFileError::InvalidNumber {
            line,
            value: value.to_string(),
        })
}

/// `sides <int>` im Bereich `2..=MAX_SIDES`
pub(super) fn parse_sides(values: &[&str], line: usize) -> Result<usize, MapFileError> {
    let value = match values {
        [] => return Err(MapFileError::MissingValue { line, field: SIDES }),
        [value] => *value,
        [_, extra, ..] => return Err(trailing(line, extra)),
    };
    let sides = value
        .parse::<usize>()
        .map_err(|_| MapFileError::InvalidNumber {
            line,
            value: value.to_string(),
        })?;
    if !(2..=MAX_SIDES).contains(&sides) {
        return Err(MapFileError::InvalidSides { line, sides });
    }
    Ok(sides)
}

/// `<#RRGGBB> <opacity>` mit Deckkraft in `0.0..=1.0`
pub(super) fn parse_color(
    values: &[&str],
    field: &'static str,
    line: usize,
) -> Result<Color, MapFileError> {
    let (hex, opacity) = match values {
        [hex, opacity] => (*hex, *opacity),
        [_, _, extra, ..] => return Err(trailing(line, extra)),
        _ => return Err(MapFileError::MissingValue { line, field }),
    };
    let opacity_value = parse_f64(opacity, line)?;
    if !(0.0..=1.0).contains(&opacity_value) {
        return Err(MapFileError::InvalidNumber {
            line,
            value: opacity.to_string(),
        });
    }
    Color::from_hex(hex, opacity_value).ok_or_else(|| MapFileError::InvalidColor {
        line,
        value: hex.to_string(),
    })
}

/// Flache x/y-Liste mit genau `sides * 2` Werten
pub(super) fn parse_points(
    values: &[&str],
    sides: usize,
    line: usize,
) -> Result<Vec<f64>, MapFileError> {
    let Some(expected) = sides.checked_mul(2) else {
        return Err(MapFileError::InvalidSides { line, sides });
    };
    if values.len() != expected {
        return Err(MapFileError::PointCountMismatch {
            line,
            sides,
            expected,
            found: values.len(),
        });
    }
    values.iter().map(|v| parse_f64(v, line)).collect()
}

fn trailing(line: usize, token: &str) -> MapFileError {
    MapFileError::TrailingValue {
        line,
        token: token.to_string(),
    }
}
