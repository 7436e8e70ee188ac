// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::types::{MAX_BASEMENT_DEPTH, MAX_FLOORS, MAX_TOTAL_UNITS, UnitField};
use rust_decimal::Decimal;

/// Coarse classification of a rejected operation.
///
/// Every error raised by the wizard maps onto exactly one kind so the
/// caller can decide whether to show a message or simply keep a control
/// disabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A supplied value failed type or range validation.
    InvalidValue,
    /// The operation was attempted out of order.
    InvalidState,
    /// A referenced unit does not exist.
    NotFound,
}

impl ErrorKind {
    /// Returns the string representation of the kind.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidValue => "invalid_value",
            Self::InvalidState => "invalid_state",
            Self::NotFound => "not_found",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The unit type code is not part of the fixed enumeration.
    InvalidUnitType(String),
    /// An amount could not be parsed as a decimal number.
    InvalidAmount {
        /// The field the amount was destined for.
        field: UnitField,
        /// The raw input.
        input: String,
    },
    /// An amount parsed but is below zero.
    NegativeAmount {
        /// The field the amount was destined for.
        field: UnitField,
        /// The rejected value.
        value: Decimal,
    },
    /// A floor index could not be parsed as an integer.
    InvalidFloor(String),
    /// A balcony flag could not be parsed as a boolean.
    InvalidBalconyFlag(String),
    /// A note was empty after trimming.
    EmptyNote,
    /// The step name is not part of the wizard sequence.
    UnknownStep(String),
    /// The building must contain at least one unit.
    InvalidUnitCount(u32),
    /// The building must have at least one floor.
    InvalidFloorCount(u32),
    /// A basement bottom floor must be strictly below ground.
    InvalidBasementFloor(i32),
    /// A basement has already been designated for this building.
    BasementAlreadyDesignated {
        /// The bottom floor of the existing basement range.
        bottom: i32,
    },
    /// The floor is outside the building's floor plan.
    FloorNotInPlan {
        /// The rejected floor.
        floor: i32,
        /// The lowest floor of the plan.
        lowest: i32,
        /// The highest floor of the plan.
        highest: i32,
    },
    /// The unit number is outside `1..=total_units`.
    UnitNotFound {
        /// The requested unit number.
        unit_number: u32,
        /// The number of units in the building.
        total_units: u32,
    },
}

impl DomainError {
    /// Returns the kind of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::BasementAlreadyDesignated { .. } => ErrorKind::InvalidState,
            Self::UnitNotFound { .. } => ErrorKind::NotFound,
            Self::InvalidUnitType(_)
            | Self::InvalidAmount { .. }
            | Self::NegativeAmount { .. }
            | Self::InvalidFloor(_)
            | Self::InvalidBalconyFlag(_)
            | Self::EmptyNote
            | Self::UnknownStep(_)
            | Self::InvalidUnitCount(_)
            | Self::InvalidFloorCount(_)
            | Self::InvalidBasementFloor(_)
            | Self::FloorNotInPlan { .. } => ErrorKind::InvalidValue,
        }
    }
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidUnitType(code) => write!(f, "Invalid unit type: '{code}'"),
            Self::InvalidAmount { field, input } => {
                write!(f, "Invalid {field} amount: '{input}' is not a number")
            }
            Self::NegativeAmount { field, value } => {
                write!(f, "Invalid {field} amount: {value} is negative")
            }
            Self::InvalidFloor(input) => write!(f, "Invalid floor: '{input}' is not an integer"),
            Self::InvalidBalconyFlag(input) => {
                write!(f, "Invalid balcony flag: '{input}' is not true or false")
            }
            Self::EmptyNote => write!(f, "Note cannot be empty"),
            Self::UnknownStep(name) => write!(f, "Unknown wizard step: '{name}'"),
            Self::InvalidUnitCount(count) => {
                write!(
                    f,
                    "Invalid unit count: {count}. Must be between 1 and {MAX_TOTAL_UNITS}"
                )
            }
            Self::InvalidFloorCount(count) => {
                write!(
                    f,
                    "Invalid floor count: {count}. Must be between 1 and {MAX_FLOORS}"
                )
            }
            Self::InvalidBasementFloor(floor) => {
                write!(
                    f,
                    "Invalid basement floor: {floor}. Must be between -{MAX_BASEMENT_DEPTH} and -1"
                )
            }
            Self::BasementAlreadyDesignated { bottom } => {
                write!(
                    f,
                    "A basement down to floor {bottom} has already been designated"
                )
            }
            Self::FloorNotInPlan {
                floor,
                lowest,
                highest,
            } => {
                write!(
                    f,
                    "Floor {floor} is outside the floor plan ({lowest} to {highest})"
                )
            }
            Self::UnitNotFound {
                unit_number,
                total_units,
            } => {
                write!(
                    f,
                    "Unit {unit_number} not found. Units are numbered 1 to {total_units}"
                )
            }
        }
    }
}

impl std::error::Error for DomainError {}
