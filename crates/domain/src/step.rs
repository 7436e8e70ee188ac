// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The fixed sequence of configuration steps.
//!
//! Steps carry only business meaning (order, which field they fill, whether
//! they gate progress). Icons and labels belong to the rendering layer.

use crate::error::DomainError;
use crate::types::UnitField;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// One phase of the unit-configuration wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    /// Assign a layout code to every unit.
    Type,
    /// Assign a floor to every unit.
    Floor,
    /// Mark units that have a balcony.
    Balcony,
    /// Assign a rent to every unit.
    Rent,
    /// Assign a deposit to every unit.
    Deposit,
    /// Attach notes to units.
    Notes,
}

impl Step {
    /// Every step in wizard order.
    pub const ALL: [Self; 6] = [
        Self::Type,
        Self::Floor,
        Self::Balcony,
        Self::Rent,
        Self::Deposit,
        Self::Notes,
    ];

    /// The step the wizard opens on.
    pub const FIRST: Self = Self::Type;

    /// The step that offers the finish action.
    pub const LAST: Self = Self::Notes;

    /// Returns the zero-based position of this step in the sequence.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::Type => 0,
            Self::Floor => 1,
            Self::Balcony => 2,
            Self::Rent => 3,
            Self::Deposit => 4,
            Self::Notes => 5,
        }
    }

    /// Returns the following step, or `None` at the end of the sequence.
    #[must_use]
    pub const fn next(&self) -> Option<Self> {
        match self {
            Self::Type => Some(Self::Floor),
            Self::Floor => Some(Self::Balcony),
            Self::Balcony => Some(Self::Rent),
            Self::Rent => Some(Self::Deposit),
            Self::Deposit => Some(Self::Notes),
            Self::Notes => None,
        }
    }

    /// Returns the preceding step, or `None` at the start of the sequence.
    #[must_use]
    pub const fn previous(&self) -> Option<Self> {
        match self {
            Self::Type => None,
            Self::Floor => Some(Self::Type),
            Self::Balcony => Some(Self::Floor),
            Self::Rent => Some(Self::Balcony),
            Self::Deposit => Some(Self::Rent),
            Self::Notes => Some(Self::Deposit),
        }
    }

    /// Returns true if every unit must receive a value in this step.
    ///
    /// Mandatory steps track exhaustion of their unassigned set; optional
    /// steps never run out of eligible units.
    #[must_use]
    pub const fn is_mandatory(&self) -> bool {
        matches!(self, Self::Type | Self::Floor | Self::Rent | Self::Deposit)
    }

    /// Returns the unit field this step writes.
    #[must_use]
    pub const fn field(&self) -> UnitField {
        match self {
            Self::Type => UnitField::Type,
            Self::Floor => UnitField::Floor,
            Self::Balcony => UnitField::Balcony,
            Self::Rent => UnitField::Rent,
            Self::Deposit => UnitField::Deposit,
            Self::Notes => UnitField::Notes,
        }
    }

    /// Returns the string representation of the step.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        self.field().as_str()
    }
}

impl std::fmt::Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Step {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|step| step.as_str() == s)
            .ok_or_else(|| DomainError::UnknownStep(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_and_previous_are_inverse() {
        for step in Step::ALL {
            if let Some(next) = step.next() {
                assert_eq!(next.previous(), Some(step));
            }
        }
        assert_eq!(Step::FIRST.previous(), None);
        assert_eq!(Step::LAST.next(), None);
    }

    #[test]
    fn test_positions_follow_sequence_order() {
        for (index, step) in Step::ALL.iter().enumerate() {
            assert_eq!(step.position(), index);
        }
    }

    #[test]
    fn test_mandatory_steps() {
        let mandatory: Vec<Step> = Step::ALL.into_iter().filter(Step::is_mandatory).collect();
        assert_eq!(
            mandatory,
            vec![Step::Type, Step::Floor, Step::Rent, Step::Deposit]
        );
    }

    #[test]
    fn test_step_string_round_trip() {
        for step in Step::ALL {
            assert_eq!(step.as_str().parse::<Step>(), Ok(step));
        }
        assert!(matches!(
            "roof".parse::<Step>(),
            Err(DomainError::UnknownStep(_))
        ));
    }
}
