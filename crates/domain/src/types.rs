// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Identifies one unit within the building being configured.
///
/// Unit numbers are assigned once, in `1..=total_units`, when the wizard
/// opens and never change afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UnitNumber(u32);

impl UnitNumber {
    /// Creates a new `UnitNumber`.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Returns the numeric value.
    #[must_use]
    pub const fn value(&self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for UnitNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for UnitNumber {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

/// A floor index. Ground is `0`, basements are negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Floor(i32);

impl Floor {
    /// The ground floor.
    pub const GROUND: Self = Self(0);

    /// Creates a new `Floor`.
    #[must_use]
    pub const fn new(index: i32) -> Self {
        Self(index)
    }

    /// Returns the floor index.
    #[must_use]
    pub const fn index(&self) -> i32 {
        self.0
    }

    /// Returns true if this floor is below ground.
    #[must_use]
    pub const fn is_basement(&self) -> bool {
        self.0 < 0
    }
}

impl std::fmt::Display for Floor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i32> for Floor {
    fn from(index: i32) -> Self {
        Self(index)
    }
}

/// Layout code of a unit, written as `rooms+living rooms`.
///
/// The set of codes is fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnitType {
    /// Studio.
    #[serde(rename = "1+0")]
    OnePlusZero,
    #[serde(rename = "1+1")]
    OnePlusOne,
    #[serde(rename = "2+1")]
    TwoPlusOne,
    #[serde(rename = "2+2")]
    TwoPlusTwo,
    #[serde(rename = "3+1")]
    ThreePlusOne,
    #[serde(rename = "3+2")]
    ThreePlusTwo,
    #[serde(rename = "4+1")]
    FourPlusOne,
    #[serde(rename = "4+2")]
    FourPlusTwo,
    #[serde(rename = "5+1")]
    FivePlusOne,
}

impl UnitType {
    /// Every unit type, in the order they are offered to the admin.
    pub const ALL: [Self; 9] = [
        Self::OnePlusZero,
        Self::OnePlusOne,
        Self::TwoPlusOne,
        Self::TwoPlusTwo,
        Self::ThreePlusOne,
        Self::ThreePlusTwo,
        Self::FourPlusOne,
        Self::FourPlusTwo,
        Self::FivePlusOne,
    ];

    /// Returns the layout code.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::OnePlusZero => "1+0",
            Self::OnePlusOne => "1+1",
            Self::TwoPlusOne => "2+1",
            Self::TwoPlusTwo => "2+2",
            Self::ThreePlusOne => "3+1",
            Self::ThreePlusTwo => "3+2",
            Self::FourPlusOne => "4+1",
            Self::FourPlusTwo => "4+2",
            Self::FivePlusOne => "5+1",
        }
    }

    /// Parses a layout code.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidUnitType` if the code is not one of
    /// the fixed layout codes.
    pub fn parse(code: &str) -> Result<Self, DomainError> {
        let trimmed: &str = code.trim();
        Self::ALL
            .into_iter()
            .find(|unit_type| unit_type.as_str() == trimmed)
            .ok_or_else(|| DomainError::InvalidUnitType(code.to_string()))
    }
}

impl std::fmt::Display for UnitType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for UnitType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// A non-negative monetary amount (rent or deposit).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Amount(#[serde(with = "rust_decimal::serde::arbitrary_precision")] Decimal);

impl Amount {
    /// The zero amount, used when an unset amount is committed.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Creates a new `Amount`.
    ///
    /// # Arguments
    ///
    /// * `field` - The field this amount is destined for (used in errors)
    /// * `value` - The decimal value
    ///
    /// # Errors
    ///
    /// Returns `DomainError::NegativeAmount` if the value is below zero.
    pub fn new(field: UnitField, value: Decimal) -> Result<Self, DomainError> {
        if value.is_sign_negative() && !value.is_zero() {
            return Err(DomainError::NegativeAmount { field, value });
        }
        Ok(Self(value))
    }

    /// Returns the decimal value.
    #[must_use]
    pub const fn value(&self) -> Decimal {
        self.0
    }
}

impl std::fmt::Display for Amount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Names one configurable attribute of a unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnitField {
    /// The layout code.
    Type,
    /// The floor index.
    Floor,
    /// The balcony flag.
    Balcony,
    /// The monthly rent.
    Rent,
    /// The security deposit.
    Deposit,
    /// Free-text notes.
    Notes,
}

impl UnitField {
    /// Returns the string representation of the field.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Type => "type",
            Self::Floor => "floor",
            Self::Balcony => "balcony",
            Self::Rent => "rent",
            Self::Deposit => "deposit",
            Self::Notes => "notes",
        }
    }
}

impl std::fmt::Display for UnitField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The largest number of units a building may have.
pub const MAX_TOTAL_UNITS: u32 = 10_000;

/// The largest number of ground-and-up floors a building may have.
pub const MAX_FLOORS: u32 = 200;

/// The deepest basement level that may be designated.
pub const MAX_BASEMENT_DEPTH: i32 = 20;

/// The building dimensions supplied by the preceding building-info form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildingDraft {
    total_units: u32,
    number_of_floors: u32,
}

impl BuildingDraft {
    /// Creates a new `BuildingDraft`.
    ///
    /// # Errors
    ///
    /// Returns an error if either count is zero or above its maximum
    /// (`MAX_TOTAL_UNITS`, `MAX_FLOORS`).
    pub const fn new(total_units: u32, number_of_floors: u32) -> Result<Self, DomainError> {
        if total_units == 0 || total_units > MAX_TOTAL_UNITS {
            return Err(DomainError::InvalidUnitCount(total_units));
        }
        if number_of_floors == 0 || number_of_floors > MAX_FLOORS {
            return Err(DomainError::InvalidFloorCount(number_of_floors));
        }
        Ok(Self {
            total_units,
            number_of_floors,
        })
    }

    /// Returns the number of units in the building.
    #[must_use]
    pub const fn total_units(&self) -> u32 {
        self.total_units
    }

    /// Returns the number of ground-and-up floors.
    #[must_use]
    pub const fn number_of_floors(&self) -> u32 {
        self.number_of_floors
    }
}
