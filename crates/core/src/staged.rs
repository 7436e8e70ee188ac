// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::Serialize;
use unit_wizard_domain::{Amount, FieldValue, Floor, Step, UnitType};

/// A value chosen by the admin and waiting to be bulk-applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum StagedValue {
    /// A layout code for the type step.
    Type(UnitType),
    /// A floor for the floor step.
    Floor(Floor),
    /// An amount for the rent or deposit step.
    Amount(Amount),
    /// A note for the notes step.
    Note(String),
}

impl StagedValue {
    /// Returns a short name for the kind of value.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Type(_) => "type",
            Self::Floor(_) => "floor",
            Self::Amount(_) => "amount",
            Self::Note(_) => "note",
        }
    }

    /// Returns true if this value can be applied in `step`.
    #[must_use]
    pub const fn accepts(&self, step: Step) -> bool {
        matches!(
            (self, step),
            (Self::Type(_), Step::Type)
                | (Self::Floor(_), Step::Floor)
                | (Self::Amount(_), Step::Rent | Step::Deposit)
                | (Self::Note(_), Step::Notes)
        )
    }

    /// Converts this value into the field write for `step`.
    ///
    /// Returns `None` if the value does not belong to the step.
    #[must_use]
    pub fn to_field_value(&self, step: Step) -> Option<FieldValue> {
        match (self, step) {
            (Self::Type(unit_type), Step::Type) => Some(FieldValue::Type(*unit_type)),
            (Self::Floor(floor), Step::Floor) => Some(FieldValue::Floor(*floor)),
            (Self::Amount(amount), Step::Rent) => Some(FieldValue::Rent(*amount)),
            (Self::Amount(amount), Step::Deposit) => Some(FieldValue::Deposit(*amount)),
            (Self::Note(text), Step::Notes) => Some(FieldValue::Notes(text.clone())),
            _ => None,
        }
    }
}

impl std::fmt::Display for StagedValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Type(unit_type) => write!(f, "type {unit_type}"),
            Self::Floor(floor) => write!(f, "floor {floor}"),
            Self::Amount(amount) => write!(f, "amount {amount}"),
            Self::Note(text) => write!(f, "note '{text}'"),
        }
    }
}
