// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The per-unit record and the typed values that can be written into it.

use crate::error::DomainError;
use crate::types::{Amount, Floor, UnitField, UnitNumber, UnitType};
use crate::validation::{parse_amount, parse_floor, validate_note};
use serde::Serialize;

/// One apartment within the building being configured.
///
/// Every configurable attribute except the balcony flag starts unset
/// (`None`). The unit number is fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Unit {
    unit_number: UnitNumber,
    /// The floor the unit is on.
    pub floor: Option<Floor>,
    /// The layout code.
    #[serde(rename = "type")]
    pub unit_type: Option<UnitType>,
    /// The monthly rent.
    pub rent_amount: Option<Amount>,
    /// The security deposit.
    pub deposit_amount: Option<Amount>,
    /// Whether the unit has a balcony.
    pub has_balcony: bool,
    /// Free-text notes.
    pub notes: Option<String>,
}

impl Unit {
    /// Creates a unit with every field unset.
    #[must_use]
    pub const fn new(unit_number: UnitNumber) -> Self {
        Self {
            unit_number,
            floor: None,
            unit_type: None,
            rent_amount: None,
            deposit_amount: None,
            has_balcony: false,
            notes: None,
        }
    }

    /// Returns the unit number.
    #[must_use]
    pub const fn unit_number(&self) -> UnitNumber {
        self.unit_number
    }

    /// Returns true if the given field holds a value.
    ///
    /// The balcony flag always counts as set since it defaults to `false`.
    #[must_use]
    pub const fn is_set(&self, field: UnitField) -> bool {
        match field {
            UnitField::Type => self.unit_type.is_some(),
            UnitField::Floor => self.floor.is_some(),
            UnitField::Balcony => true,
            UnitField::Rent => self.rent_amount.is_some(),
            UnitField::Deposit => self.deposit_amount.is_some(),
            UnitField::Notes => self.notes.is_some(),
        }
    }

    /// Writes a value into the matching field.
    pub fn write(&mut self, value: &FieldValue) {
        match value {
            FieldValue::Type(unit_type) => self.unit_type = Some(*unit_type),
            FieldValue::Floor(floor) => self.floor = Some(*floor),
            FieldValue::Balcony(has_balcony) => self.has_balcony = *has_balcony,
            FieldValue::Rent(amount) => self.rent_amount = Some(*amount),
            FieldValue::Deposit(amount) => self.deposit_amount = Some(*amount),
            FieldValue::Notes(text) => self.notes = Some(text.clone()),
        }
    }

    /// Resets a field back to unset (`false` for the balcony flag).
    pub fn clear(&mut self, field: UnitField) {
        match field {
            UnitField::Type => self.unit_type = None,
            UnitField::Floor => self.floor = None,
            UnitField::Balcony => self.has_balcony = false,
            UnitField::Rent => self.rent_amount = None,
            UnitField::Deposit => self.deposit_amount = None,
            UnitField::Notes => self.notes = None,
        }
    }
}

/// A typed value for exactly one unit field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "field", content = "value", rename_all = "snake_case")]
pub enum FieldValue {
    /// A layout code.
    Type(UnitType),
    /// A floor index.
    Floor(Floor),
    /// A balcony flag.
    Balcony(bool),
    /// A rent amount.
    Rent(Amount),
    /// A deposit amount.
    Deposit(Amount),
    /// A non-empty note.
    Notes(String),
}

impl FieldValue {
    /// Returns the field this value belongs to.
    #[must_use]
    pub const fn field(&self) -> UnitField {
        match self {
            Self::Type(_) => UnitField::Type,
            Self::Floor(_) => UnitField::Floor,
            Self::Balcony(_) => UnitField::Balcony,
            Self::Rent(_) => UnitField::Rent,
            Self::Deposit(_) => UnitField::Deposit,
            Self::Notes(_) => UnitField::Notes,
        }
    }

    /// Converts raw form input into a typed value for `field`.
    ///
    /// # Errors
    ///
    /// Returns an error if the input does not satisfy the field's
    /// constraints (unknown layout code, non-integer floor, non-numeric or
    /// negative amount, unrecognised balcony flag, empty note).
    pub fn parse(field: UnitField, raw: &str) -> Result<Self, DomainError> {
        match field {
            UnitField::Type => UnitType::parse(raw).map(Self::Type),
            UnitField::Floor => parse_floor(raw).map(Self::Floor),
            UnitField::Balcony => match raw.trim().to_ascii_lowercase().as_str() {
                "true" | "yes" | "1" => Ok(Self::Balcony(true)),
                "false" | "no" | "0" => Ok(Self::Balcony(false)),
                _ => Err(DomainError::InvalidBalconyFlag(raw.to_string())),
            },
            UnitField::Rent => parse_amount(UnitField::Rent, raw).map(Self::Rent),
            UnitField::Deposit => parse_amount(UnitField::Deposit, raw).map(Self::Deposit),
            UnitField::Notes => validate_note(raw).map(Self::Notes),
        }
    }
}
