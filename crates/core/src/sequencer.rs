// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Step ordering and completion tracking.
//!
//! Navigation is never gated on completion: moving to another step only
//! changes which units count as unassigned.

use std::collections::BTreeSet;

use serde::Serialize;
use unit_wizard_domain::{Step, UnitNumber};

use crate::collection::UnitCollection;

/// Completion state of one step, as reported to the rendering layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StepProgress {
    /// The step.
    pub step: Step,
    /// Whether the step gates completion.
    pub mandatory: bool,
    /// Whether the step has been completed.
    pub completed: bool,
}

/// Tracks the active step and which steps are complete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepSequencer {
    current: Step,
    completed: [bool; Step::ALL.len()],
}

impl StepSequencer {
    /// Creates a sequencer positioned on the first step with nothing complete.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            current: Step::FIRST,
            completed: [false; Step::ALL.len()],
        }
    }

    /// Returns the active step.
    #[must_use]
    pub const fn current(&self) -> Step {
        self.current
    }

    /// Moves to the next step. A no-op on the last step.
    pub fn advance(&mut self) -> Step {
        if let Some(next) = self.current.next() {
            self.current = next;
        }
        self.current
    }

    /// Moves to the previous step. A no-op on the first step.
    pub fn retreat(&mut self) -> Step {
        if let Some(previous) = self.current.previous() {
            self.current = previous;
        }
        self.current
    }

    /// Returns true if `step` has been completed.
    #[must_use]
    pub const fn is_completed(&self, step: Step) -> bool {
        self.completed[step.position()]
    }

    /// Computes the units still missing a value for `step`.
    ///
    /// Optional steps never exhaust: every unit stays eligible.
    #[must_use]
    pub fn compute_unassigned(step: Step, collection: &UnitCollection) -> BTreeSet<UnitNumber> {
        if step.is_mandatory() {
            collection.unset_unit_numbers(step.field())
        } else {
            collection.unit_numbers()
        }
    }

    /// Records that an apply happened on `step` and updates its completion.
    ///
    /// Mandatory steps complete once no unit is unassigned. Optional steps
    /// complete as soon as any apply happens.
    ///
    /// Returns the completion flag after the update.
    pub fn mark_complete_if_exhausted(&mut self, step: Step, collection: &UnitCollection) -> bool {
        let exhausted: bool =
            !step.is_mandatory() || Self::compute_unassigned(step, collection).is_empty();
        if exhausted {
            self.completed[step.position()] = true;
        }
        self.completed[step.position()]
    }

    /// Marks `step` as not completed.
    pub const fn reset(&mut self, step: Step) {
        self.completed[step.position()] = false;
    }

    /// Returns the completion state of every step, in order.
    #[must_use]
    pub fn progress(&self) -> Vec<StepProgress> {
        Step::ALL
            .into_iter()
            .map(|step| StepProgress {
                step,
                mandatory: step.is_mandatory(),
                completed: self.is_completed(step),
            })
            .collect()
    }

    /// Returns the mandatory steps that are not complete.
    #[must_use]
    pub fn incomplete_mandatory_steps(&self) -> Vec<Step> {
        Step::ALL
            .into_iter()
            .filter(|step| step.is_mandatory() && !self.is_completed(*step))
            .collect()
    }
}

impl Default for StepSequencer {
    fn default() -> Self {
        Self::new()
    }
}
