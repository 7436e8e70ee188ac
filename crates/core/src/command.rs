// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};
use unit_wizard_domain::{Floor, Step, UnitNumber, UnitType};

/// A command represents admin intent as data only.
///
/// Commands are the only way the API layer changes a wizard session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum Command {
    /// Stage a layout code on the type step.
    SelectType {
        /// The layout code.
        unit_type: UnitType,
    },
    /// Stage a floor on the floor step.
    SelectFloor {
        /// The floor index.
        floor: Floor,
    },
    /// Stage an amount on the rent or deposit step.
    StageAmount {
        /// The amount as typed by the admin.
        amount: String,
    },
    /// Stage a note on the notes step.
    StageNote {
        /// The note text.
        note: String,
    },
    /// Add or remove one unit from the selection.
    ToggleUnit {
        /// The unit to toggle.
        unit_number: UnitNumber,
    },
    /// Replace the selection with a range of units.
    SelectRange {
        /// One end of the range.
        start: UnitNumber,
        /// The other end of the range.
        end: UnitNumber,
    },
    /// Empty the selection.
    ClearSelection,
    /// Write the staged value into every selected unit.
    Apply,
    /// Move to the next step.
    Advance,
    /// Move to the previous step.
    Retreat,
    /// Clear every unit's value for a step.
    ResetStep {
        /// The step to reset.
        step: Step,
    },
    /// Extend the floor plan down to a basement floor.
    DesignateBasement {
        /// The lowest basement floor.
        bottom_floor: Floor,
    },
    /// Finish the wizard and produce the submission payload.
    Finish,
}

impl Command {
    /// Returns the audit action name for this command.
    #[must_use]
    pub const fn action_name(&self) -> &'static str {
        match self {
            Self::SelectType { .. } => "SelectType",
            Self::SelectFloor { .. } => "SelectFloor",
            Self::StageAmount { .. } => "StageAmount",
            Self::StageNote { .. } => "StageNote",
            Self::ToggleUnit { .. } => "ToggleUnit",
            Self::SelectRange { .. } => "SelectRange",
            Self::ClearSelection => "ClearSelection",
            Self::Apply => "Apply",
            Self::Advance => "Advance",
            Self::Retreat => "Retreat",
            Self::ResetStep { .. } => "ResetStep",
            Self::DesignateBasement { .. } => "DesignateBasement",
            Self::Finish => "Finish",
        }
    }
}
