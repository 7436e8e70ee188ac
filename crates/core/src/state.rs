// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::Serialize;
use unit_wizard_audit::AuditEvent;
use unit_wizard_domain::{Floor, FloorPlan, Step, Unit, UnitNumber};

use crate::engine::AppliedResult;
use crate::payload::CompletedBuildingUnits;
use crate::sequencer::StepProgress;
use crate::session::WizardSession;
use crate::staged::StagedValue;

/// Everything needed to render the wizard for its current step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WizardView {
    /// The active step.
    pub current_step: Step,
    /// Units still missing a value for the active step.
    pub unassigned_unit_numbers: Vec<UnitNumber>,
    /// Units currently selected.
    pub selection_members: Vec<UnitNumber>,
    /// Units that may be selected right now.
    pub eligible_unit_numbers: Vec<UnitNumber>,
    /// The value waiting to be applied.
    pub staged_value: Option<StagedValue>,
    /// The floors units may be assigned to.
    pub floor_plan: FloorPlan,
    /// Completion state of every step.
    pub step_progress: Vec<StepProgress>,
    /// Every unit as currently configured.
    pub units: Vec<Unit>,
    /// Whether the session has been finished.
    pub finished: bool,
}

/// What an accepted command did to the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum CommandOutcome {
    /// A value was staged.
    Staged {
        /// The staged value.
        value: StagedValue,
    },
    /// The selection changed.
    SelectionChanged {
        /// How many units are selected now.
        selected: usize,
        /// False when a toggle targeted an ineligible unit.
        changed: bool,
    },
    /// A bulk apply wrote values.
    Applied(AppliedResult),
    /// The active step changed (or stayed put at either end).
    StepChanged {
        /// The active step after the command.
        step: Step,
    },
    /// A step was reset.
    StepReset {
        /// The reset step.
        step: Step,
    },
    /// The floor plan was extended with a basement.
    BasementDesignated {
        /// The full floor plan after extension.
        floors: Vec<Floor>,
    },
    /// The session was finished.
    Finished {
        /// The submission payload.
        payload: CompletedBuildingUnits,
        /// Mandatory steps that were still incomplete.
        incomplete_steps: Vec<Step>,
    },
}

/// The result of a successful command.
///
/// Commands are atomic: a rejected command leaves the session untouched and
/// produces no audit event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionResult {
    /// The session after the command.
    pub new_session: WizardSession,
    /// What the command did.
    pub outcome: CommandOutcome,
    /// The audit event recording this transition.
    pub audit_event: AuditEvent,
}
