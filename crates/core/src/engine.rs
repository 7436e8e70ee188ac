// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Bulk apply: writes one staged value into every selected unit.

use serde::Serialize;
use tracing::info;
use unit_wizard_domain::{FieldValue, Step, UnitNumber, validate_note};

use crate::collection::UnitCollection;
use crate::error::CoreError;
use crate::selection::SelectionSet;
use crate::sequencer::StepSequencer;
use crate::staged::StagedValue;

/// The outcome of a successful bulk apply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppliedResult {
    /// The step that was applied.
    pub step: Step,
    /// The units that received the value, in ascending order.
    pub applied_to: Vec<UnitNumber>,
    /// How many units are still unassigned for the step.
    pub remaining_unassigned: usize,
    /// Whether the step is now complete.
    pub step_completed: bool,
}

/// Writes the staged value for `step` into every selected unit.
///
/// Every precondition is checked before the first write. On success the
/// selection and staged value are cleared and the step's completion is
/// recomputed.
///
/// # Arguments
///
/// * `step` - The step being applied
/// * `selection` - The target units; cleared on success
/// * `staged` - The staged value; cleared on success
/// * `collection` - The units to write into
/// * `sequencer` - Receives the completion update
///
/// # Errors
///
/// Returns an error if:
/// - The selection is empty
/// - No value is staged (except for the balcony step, which always writes `true`)
/// - The staged value does not belong to `step`
/// - A staged note is blank
/// - A selected unit number is outside the collection
pub fn bulk_apply(
    step: Step,
    selection: &mut SelectionSet,
    staged: &mut Option<StagedValue>,
    collection: &mut UnitCollection,
    sequencer: &mut StepSequencer,
) -> Result<AppliedResult, CoreError> {
    if selection.is_empty() {
        return Err(CoreError::EmptySelection { step });
    }

    let value: FieldValue = resolve_field_value(step, staged.as_ref())?;
    if let FieldValue::Notes(text) = &value {
        validate_note(text)?;
    }

    let applied_to: Vec<UnitNumber> = selection.members().iter().copied().collect();
    collection.bulk_set_field(applied_to.iter().copied(), &value)?;

    selection.clear();
    *staged = None;

    let step_completed: bool = sequencer.mark_complete_if_exhausted(step, collection);
    let remaining_unassigned: usize = StepSequencer::compute_unassigned(step, collection).len();

    info!(
        step = %step,
        units = applied_to.len(),
        remaining = remaining_unassigned,
        completed = step_completed,
        "Applied step value"
    );

    Ok(AppliedResult {
        step,
        applied_to,
        remaining_unassigned,
        step_completed,
    })
}

/// Determines what to write for `step` given the staged value.
fn resolve_field_value(step: Step, staged: Option<&StagedValue>) -> Result<FieldValue, CoreError> {
    // Balcony assignment is additive; there is no bulk "remove balcony".
    if step == Step::Balcony {
        return Ok(FieldValue::Balcony(true));
    }

    let staged: &StagedValue = staged.ok_or(CoreError::NothingStaged { step })?;
    staged
        .to_field_value(step)
        .ok_or_else(|| CoreError::StagedValueMismatch {
            step,
            staged: staged.kind(),
        })
}
