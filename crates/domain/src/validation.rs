// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::types::{Amount, Floor, MAX_BASEMENT_DEPTH, UnitField, UnitNumber};
use rust_decimal::Decimal;
use std::str::FromStr;

/// Parses a rent or deposit amount from form input.
///
/// Surrounding whitespace is ignored.
///
/// # Arguments
///
/// * `field` - The field the amount is destined for
/// * `raw` - The raw input
///
/// # Returns
///
/// * `Ok(Amount)` if the input is a non-negative decimal number
/// * `Err(DomainError)` otherwise
///
/// # Errors
///
/// Returns an error if:
/// - The input is not a decimal number
/// - The number is negative
pub fn parse_amount(field: UnitField, raw: &str) -> Result<Amount, DomainError> {
    let value: Decimal =
        Decimal::from_str(raw.trim()).map_err(|_| DomainError::InvalidAmount {
            field,
            input: raw.to_string(),
        })?;
    Amount::new(field, value)
}

/// Parses a floor index from form input.
///
/// # Errors
///
/// Returns `DomainError::InvalidFloor` if the input is not an integer.
pub fn parse_floor(raw: &str) -> Result<Floor, DomainError> {
    raw.trim()
        .parse::<i32>()
        .map(Floor::new)
        .map_err(|_| DomainError::InvalidFloor(raw.to_string()))
}

/// Validates a free-text note.
///
/// The note is kept as entered; only its emptiness is checked after
/// trimming.
///
/// # Errors
///
/// Returns `DomainError::EmptyNote` if the note is blank.
pub fn validate_note(raw: &str) -> Result<String, DomainError> {
    if raw.trim().is_empty() {
        return Err(DomainError::EmptyNote);
    }
    Ok(raw.to_string())
}

/// Validates that a basement bottom floor lies below ground.
///
/// # Errors
///
/// Returns `DomainError::InvalidBasementFloor` if the floor is `0` or above,
/// or deeper than `MAX_BASEMENT_DEPTH` levels.
pub const fn validate_basement_floor(bottom: Floor) -> Result<(), DomainError> {
    if !bottom.is_basement() || bottom.index() < -MAX_BASEMENT_DEPTH {
        return Err(DomainError::InvalidBasementFloor(bottom.index()));
    }
    Ok(())
}

/// Validates that a unit number lies within `1..=total_units`.
///
/// # Errors
///
/// Returns `DomainError::UnitNotFound` if the unit number is out of range.
pub const fn validate_unit_number(
    unit_number: UnitNumber,
    total_units: u32,
) -> Result<(), DomainError> {
    let value: u32 = unit_number.value();
    if value == 0 || value > total_units {
        return Err(DomainError::UnitNotFound {
            unit_number: value,
            total_units,
        });
    }
    Ok(())
}
