// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The configuration wizard: one building's units, floor plan and step
//! state, driven by explicit operations.

use std::collections::BTreeSet;

use tracing::{debug, info, warn};
use unit_wizard_audit::StateSnapshot;
use unit_wizard_domain::{
    Amount, BuildingDraft, Direction, Floor, FloorPlan, Step, UnitNumber, UnitType, parse_amount,
    validate_note,
};

use crate::collection::UnitCollection;
use crate::engine::{AppliedResult, bulk_apply};
use crate::error::CoreError;
use crate::payload::CompletedBuildingUnits;
use crate::selection::SelectionSet;
use crate::sequencer::StepSequencer;
use crate::staged::StagedValue;
use crate::state::WizardView;

/// A wizard session for one building.
///
/// The session owns all mutable state. Once [`WizardSession::finish`] has
/// succeeded every mutating operation fails with
/// [`CoreError::SessionFinished`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WizardSession {
    draft: BuildingDraft,
    units: UnitCollection,
    floor_plan: FloorPlan,
    sequencer: StepSequencer,
    selection: SelectionSet,
    staged: Option<StagedValue>,
    finished: bool,
}

impl WizardSession {
    /// Opens a session for a validated building draft.
    ///
    /// All units start unset, the floor plan covers the ground-and-up
    /// floors and the wizard is positioned on the first step.
    ///
    /// # Errors
    ///
    /// Returns an error if the draft's unit or floor count is zero.
    pub fn open(draft: BuildingDraft) -> Result<Self, CoreError> {
        let units: UnitCollection = UnitCollection::initialize(draft.total_units())?;
        let floor_plan: FloorPlan = FloorPlan::generate(draft.number_of_floors())?;

        info!(
            total_units = draft.total_units(),
            number_of_floors = draft.number_of_floors(),
            "Opened wizard session"
        );

        Ok(Self {
            draft,
            units,
            floor_plan,
            sequencer: StepSequencer::new(),
            selection: SelectionSet::new(),
            staged: None,
            finished: false,
        })
    }

    /// Returns the building draft the session was opened with.
    #[must_use]
    pub const fn draft(&self) -> &BuildingDraft {
        &self.draft
    }

    /// Returns the unit store.
    #[must_use]
    pub const fn units(&self) -> &UnitCollection {
        &self.units
    }

    /// Returns the current floor plan.
    #[must_use]
    pub const fn floor_plan(&self) -> &FloorPlan {
        &self.floor_plan
    }

    /// Returns the step sequencer.
    #[must_use]
    pub const fn sequencer(&self) -> &StepSequencer {
        &self.sequencer
    }

    /// Returns the active step.
    #[must_use]
    pub const fn current_step(&self) -> Step {
        self.sequencer.current()
    }

    /// Returns the current selection.
    #[must_use]
    pub const fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    /// Returns the staged value, if any.
    #[must_use]
    pub const fn staged(&self) -> Option<&StagedValue> {
        self.staged.as_ref()
    }

    /// Returns true once the session has been finished.
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        self.finished
    }

    /// Returns the units still missing a value for the active step.
    #[must_use]
    pub fn unassigned(&self) -> BTreeSet<UnitNumber> {
        StepSequencer::compute_unassigned(self.current_step(), &self.units)
    }

    /// Returns the units that may currently be selected.
    ///
    /// Type and floor selections only open up once a value is staged.
    /// Balcony and notes may target any unit.
    #[must_use]
    pub fn eligible(&self) -> BTreeSet<UnitNumber> {
        match self.current_step() {
            Step::Type | Step::Floor => {
                if self.staged.is_some() {
                    self.unassigned()
                } else {
                    BTreeSet::new()
                }
            }
            Step::Rent | Step::Deposit => self.unassigned(),
            Step::Balcony | Step::Notes => self.units.unit_numbers(),
        }
    }

    /// Returns the mandatory steps that are not yet complete.
    #[must_use]
    pub fn incomplete_mandatory_steps(&self) -> Vec<Step> {
        self.sequencer.incomplete_mandatory_steps()
    }

    /// Moves to the next step, discarding the selection and staged value.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::SessionFinished` if the session is finished.
    pub fn advance(&mut self) -> Result<Step, CoreError> {
        self.ensure_active()?;
        let step: Step = self.sequencer.advance();
        self.discard_pending();
        debug!(step = %step, "Advanced to step");
        Ok(step)
    }

    /// Moves to the previous step, discarding the selection and staged value.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::SessionFinished` if the session is finished.
    pub fn retreat(&mut self) -> Result<Step, CoreError> {
        self.ensure_active()?;
        let step: Step = self.sequencer.retreat();
        self.discard_pending();
        debug!(step = %step, "Retreated to step");
        Ok(step)
    }

    /// Stages a layout code. Only valid on the type step.
    ///
    /// # Errors
    ///
    /// Returns an error if the session is finished or the type step is not
    /// active.
    pub fn select_type(&mut self, unit_type: UnitType) -> Result<(), CoreError> {
        self.stage(StagedValue::Type(unit_type))
    }

    /// Stages a floor. Only valid on the floor step.
    ///
    /// # Errors
    ///
    /// Returns an error if the session is finished, the floor step is not
    /// active or the floor is outside the floor plan.
    pub fn select_floor(&mut self, floor: Floor) -> Result<(), CoreError> {
        self.stage(StagedValue::Floor(floor))
    }

    /// Parses and stages an amount for the rent or deposit step.
    ///
    /// # Errors
    ///
    /// Returns an error if the session is finished, neither amount step is
    /// active, or the input is not a non-negative number.
    pub fn stage_amount(&mut self, raw: &str) -> Result<Amount, CoreError> {
        self.ensure_active()?;
        let step: Step = self.current_step();
        let placeholder: StagedValue = StagedValue::Amount(Amount::ZERO);
        self.ensure_step_accepts(&placeholder)?;
        let amount: Amount = parse_amount(step.field(), raw)?;
        self.stage(StagedValue::Amount(amount))?;
        Ok(amount)
    }

    /// Stages a note for the notes step.
    ///
    /// # Errors
    ///
    /// Returns an error if the session is finished, the notes step is not
    /// active or the note is blank.
    pub fn stage_note(&mut self, raw: &str) -> Result<(), CoreError> {
        self.ensure_active()?;
        self.ensure_step_accepts(&StagedValue::Note(String::new()))?;
        let note: String = validate_note(raw)?;
        self.stage(StagedValue::Note(note))
    }

    /// Stages a typed value, replacing anything staged before.
    ///
    /// The selection is kept.
    ///
    /// # Errors
    ///
    /// Returns an error if the session is finished, the value does not
    /// belong to the active step or a floor is outside the floor plan.
    pub fn stage(&mut self, value: StagedValue) -> Result<(), CoreError> {
        self.ensure_active()?;
        self.ensure_step_accepts(&value)?;
        if let StagedValue::Floor(floor) = value {
            self.floor_plan.validate_floor(floor)?;
        }
        debug!(step = %self.current_step(), staged = %value, "Staged value");
        self.staged = Some(value);
        Ok(())
    }

    /// Adds or removes a unit from the selection.
    ///
    /// Returns `false` when the unit is not currently eligible; the
    /// selection is left unchanged in that case.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::SessionFinished` if the session is finished.
    pub fn toggle_unit(&mut self, unit_number: UnitNumber) -> Result<bool, CoreError> {
        self.ensure_active()?;
        let eligible: BTreeSet<UnitNumber> = self.eligible();
        let toggled: bool = self.selection.toggle(unit_number, &eligible);
        debug!(
            unit = %unit_number,
            toggled,
            selected = self.selection.len(),
            "Toggled unit"
        );
        Ok(toggled)
    }

    /// Replaces the selection with every eligible unit in the range.
    ///
    /// Returns the number of selected units.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::SessionFinished` if the session is finished.
    pub fn select_range(
        &mut self,
        start: UnitNumber,
        end: UnitNumber,
    ) -> Result<usize, CoreError> {
        self.ensure_active()?;
        let eligible: BTreeSet<UnitNumber> = self.eligible();
        let selected: usize = self.selection.set_range(start, end, &eligible);
        debug!(start = %start, end = %end, selected, "Selected unit range");
        Ok(selected)
    }

    /// Empties the selection.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::SessionFinished` if the session is finished.
    pub fn clear_selection(&mut self) -> Result<(), CoreError> {
        self.ensure_active()?;
        self.selection.clear();
        debug!("Cleared selection");
        Ok(())
    }

    /// Writes the staged value into every selected unit.
    ///
    /// # Errors
    ///
    /// Returns an error if the session is finished or any bulk apply
    /// precondition fails. Nothing is written in that case.
    pub fn apply(&mut self) -> Result<AppliedResult, CoreError> {
        self.ensure_active()?;
        let step: Step = self.current_step();
        bulk_apply(
            step,
            &mut self.selection,
            &mut self.staged,
            &mut self.units,
            &mut self.sequencer,
        )
    }

    /// Extends the floor plan downward with the basement range
    /// `[bottom, -1]`.
    ///
    /// # Errors
    ///
    /// Returns an error if the session is finished, `bottom` is not below
    /// ground or a basement has already been designated.
    pub fn designate_basement(&mut self, bottom: Floor) -> Result<&FloorPlan, CoreError> {
        self.ensure_active()?;
        let extended: FloorPlan = self.floor_plan.extend_with_basement(bottom)?;
        info!(
            bottom = %bottom,
            floors = extended.len(),
            "Designated basement"
        );
        self.floor_plan = extended;
        Ok(&self.floor_plan)
    }

    /// Moves one floor up or down within the plan, saturating at either end.
    #[must_use]
    pub fn step_floor(&self, current: Floor, direction: Direction) -> Floor {
        self.floor_plan.step(current, direction)
    }

    /// Clears every unit's value for `step` and marks it incomplete.
    ///
    /// When `step` is the active step the selection is dropped as well, since
    /// its members were chosen against the old unassigned set.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::SessionFinished` if the session is finished.
    pub fn reset_step(&mut self, step: Step) -> Result<(), CoreError> {
        self.ensure_active()?;
        self.units.clear_field(step.field());
        self.sequencer.reset(step);
        if step == self.current_step() {
            self.discard_pending();
        }
        info!(step = %step, "Reset step");
        Ok(())
    }

    /// Finishes the session and produces the submission payload.
    ///
    /// Unset fields are committed as defaults. Finishing with incomplete
    /// mandatory steps is allowed and logged as a warning.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::SessionFinished` if the session is already
    /// finished.
    pub fn finish(&mut self) -> Result<CompletedBuildingUnits, CoreError> {
        self.ensure_active()?;

        let incomplete: Vec<Step> = self.incomplete_mandatory_steps();
        if !incomplete.is_empty() {
            let names: Vec<&str> = incomplete.iter().map(Step::as_str).collect();
            warn!(
                incomplete_steps = %names.join(","),
                "Finishing wizard with incomplete mandatory steps"
            );
        }

        let payload: CompletedBuildingUnits =
            CompletedBuildingUnits::from_units(&self.draft, &self.floor_plan, self.units.snapshot());
        self.finished = true;
        self.discard_pending();

        info!(units = payload.units.len(), "Finished wizard session");
        Ok(payload)
    }

    /// Returns everything the rendering layer needs to draw the wizard.
    #[must_use]
    pub fn view(&self) -> WizardView {
        WizardView {
            current_step: self.current_step(),
            unassigned_unit_numbers: self.unassigned().into_iter().collect(),
            selection_members: self.selection.members().iter().copied().collect(),
            eligible_unit_numbers: self.eligible().into_iter().collect(),
            staged_value: self.staged.clone(),
            floor_plan: self.floor_plan.clone(),
            step_progress: self.sequencer.progress(),
            units: self.units.snapshot().to_vec(),
            finished: self.finished,
        }
    }

    /// Summarizes the session for audit snapshots.
    #[must_use]
    pub fn to_snapshot(&self) -> StateSnapshot {
        let staged: &str = self.staged.as_ref().map_or("none", StagedValue::kind);
        StateSnapshot::new(format!(
            "step={},unassigned={},selected={},staged={},floors={},finished={}",
            self.current_step(),
            self.unassigned().len(),
            self.selection.len(),
            staged,
            self.floor_plan.len(),
            self.finished
        ))
    }

    /// Fails once the session has been finished.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::SessionFinished` if the session is finished.
    pub const fn ensure_active(&self) -> Result<(), CoreError> {
        if self.finished {
            return Err(CoreError::SessionFinished);
        }
        Ok(())
    }

    fn ensure_step_accepts(&self, value: &StagedValue) -> Result<(), CoreError> {
        let step: Step = self.current_step();
        if value.accepts(step) {
            Ok(())
        } else {
            Err(CoreError::StagedValueMismatch {
                step,
                staged: value.kind(),
            })
        }
    }

    fn discard_pending(&mut self) {
        self.selection.clear();
        self.staged = None;
    }
}
