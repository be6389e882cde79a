//! Parsing and validation of user-supplied rectangle values.
//!
//! Dimensions must be positive whole numbers; coordinates may be any
//! whole number, negative included.

use thiserror::Error;

use rectlink_core::{Point, Rectangle};

/// Field names in the order a rectangle spec lists them.
pub const SPEC_FIELDS: [&str; 4] = ["LENGTH", "WIDTH", "BOTTOM-LEFT X", "BOTTOM-LEFT Y"];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("invalid {field} {input:?}: must be a positive, whole number")]
    NotADimension { field: &'static str, input: String },
    #[error("invalid {field} {input:?}: must be a whole number")]
    NotACoordinate { field: &'static str, input: String },
    #[error("invalid answer {0:?}: enter \"Y\" for \"Yes\" and \"N\" for \"No\"")]
    NotYesNo(String),
    #[error("expected 4 comma-separated values (LENGTH,WIDTH,X,Y), got {0}")]
    WrongArity(usize),
    #[error("{field} of the rectangle is outside the 64-bit integer range")]
    TooLarge { field: &'static str },
}

/// Parses a length or width.
pub fn parse_dimension(field: &'static str, input: &str) -> Result<i64, InputError> {
    match input.trim().parse::<i64>() {
        Ok(value) if value > 0 => Ok(value),
        _ => Err(InputError::NotADimension {
            field,
            input: input.trim().to_string(),
        }),
    }
}

/// Parses an X or Y coordinate.
pub fn parse_coordinate(field: &'static str, input: &str) -> Result<i64, InputError> {
    input
        .trim()
        .parse::<i64>()
        .map_err(|_| InputError::NotACoordinate {
            field,
            input: input.trim().to_string(),
        })
}

/// Parses a single-letter `Y`/`N` answer, case-insensitively.
pub fn parse_yes_no(input: &str) -> Result<bool, InputError> {
    match input.trim() {
        "y" | "Y" => Ok(true),
        "n" | "N" => Ok(false),
        other => Err(InputError::NotYesNo(other.to_string())),
    }
}

/// Parses a `LENGTH,WIDTH,X,Y` rectangle spec.
pub fn parse_spec(input: &str) -> Result<Rectangle, InputError> {
    let parts: Vec<&str> = input.split(',').collect();
    let [length, width, x, y] = parts[..] else {
        return Err(InputError::WrongArity(parts.len()));
    };

    checked_rectangle(
        parse_dimension(SPEC_FIELDS[0], length)?,
        parse_dimension(SPEC_FIELDS[1], width)?,
        parse_coordinate(SPEC_FIELDS[2], x)?,
        parse_coordinate(SPEC_FIELDS[3], y)?,
    )
}

/// Builds a rectangle whose area and far corners all fit in `i64`.
pub fn checked_rectangle(
    length: i64,
    width: i64,
    x: i64,
    y: i64,
) -> Result<Rectangle, InputError> {
    if length.checked_mul(width).is_none() {
        return Err(InputError::TooLarge { field: "AREA" });
    }
    if x.checked_add(length).is_none() {
        return Err(InputError::TooLarge {
            field: "BOTTOM-RIGHT X",
        });
    }
    if y.checked_add(width).is_none() {
        return Err(InputError::TooLarge { field: "TOP-LEFT Y" });
    }
    Ok(Rectangle::new(length, width, Point::new(x, y)))
}
