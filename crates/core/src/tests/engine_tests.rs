// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::str::FromStr;

use rust_decimal::Decimal;

use crate::tests::helpers::units;
use crate::{
    AppliedResult, CoreError, SelectionSet, StagedValue, StepSequencer, UnitCollection,
    bulk_apply,
};
use unit_wizard_domain::{Amount, Floor, Step, UnitField, UnitNumber, UnitType};

struct Fixture {
    selection: SelectionSet,
    staged: Option<StagedValue>,
    collection: UnitCollection,
    sequencer: StepSequencer,
}

impl Fixture {
    fn new(total_units: u32) -> Self {
        Self {
            selection: SelectionSet::new(),
            staged: None,
            collection: UnitCollection::initialize(total_units).unwrap(),
            sequencer: StepSequencer::new(),
        }
    }

    fn select(&mut self, numbers: &[u32]) {
        let eligible = self.collection.unit_numbers();
        for number in numbers {
            self.selection.toggle(UnitNumber::new(*number), &eligible);
        }
    }

    fn apply(&mut self, step: Step) -> Result<AppliedResult, CoreError> {
        bulk_apply(
            step,
            &mut self.selection,
            &mut self.staged,
            &mut self.collection,
            &mut self.sequencer,
        )
    }
}

#[test]
fn test_apply_writes_selected_units_and_clears_pending_state() {
    let mut fixture: Fixture = Fixture::new(4);
    fixture.select(&[1, 2]);
    fixture.staged = Some(StagedValue::Type(UnitType::TwoPlusOne));

    let result: AppliedResult = fixture.apply(Step::Type).unwrap();

    assert_eq!(result.applied_to, vec![UnitNumber::new(1), UnitNumber::new(2)]);
    assert_eq!(result.remaining_unassigned, 2);
    assert!(!result.step_completed);
    assert!(fixture.selection.is_empty());
    assert!(fixture.staged.is_none());
    assert_eq!(
        fixture.collection.get(UnitNumber::new(2)).unwrap().unit_type,
        Some(UnitType::TwoPlusOne)
    );
    assert_eq!(fixture.collection.get(UnitNumber::new(3)).unwrap().unit_type, None);
}

#[test]
fn test_apply_with_empty_selection_is_rejected() {
    let mut fixture: Fixture = Fixture::new(2);
    fixture.staged = Some(StagedValue::Floor(Floor::new(0)));

    let result: Result<AppliedResult, CoreError> = fixture.apply(Step::Floor);

    assert_eq!(result, Err(CoreError::EmptySelection { step: Step::Floor }));
    assert!(fixture.staged.is_some());
}

#[test]
fn test_apply_without_staged_value_is_rejected() {
    let mut fixture: Fixture = Fixture::new(2);
    fixture.select(&[1]);
    let before: UnitCollection = fixture.collection.clone();

    let result: Result<AppliedResult, CoreError> = fixture.apply(Step::Rent);

    assert_eq!(result, Err(CoreError::NothingStaged { step: Step::Rent }));
    assert_eq!(fixture.collection, before);
    assert_eq!(fixture.selection.members(), &units(&[1]));
}

#[test]
fn test_apply_with_mismatched_value_is_rejected() {
    let mut fixture: Fixture = Fixture::new(2);
    fixture.select(&[1]);
    fixture.staged = Some(StagedValue::Type(UnitType::OnePlusZero));

    let result: Result<AppliedResult, CoreError> = fixture.apply(Step::Floor);

    assert_eq!(
        result,
        Err(CoreError::StagedValueMismatch {
            step: Step::Floor,
            staged: "type"
        })
    );
    assert_eq!(fixture.collection.unset_unit_numbers(UnitField::Floor).len(), 2);
}

#[test]
fn test_balcony_apply_needs_no_staged_value() {
    let mut fixture: Fixture = Fixture::new(3);
    fixture.select(&[1, 3]);

    let result: AppliedResult = fixture.apply(Step::Balcony).unwrap();

    assert!(result.step_completed);
    assert_eq!(result.remaining_unassigned, 3);
    let flags: Vec<bool> = fixture
        .collection
        .snapshot()
        .iter()
        .map(|unit| unit.has_balcony)
        .collect();
    assert_eq!(flags, vec![true, false, true]);
}

#[test]
fn test_amount_is_routed_by_step() {
    let mut fixture: Fixture = Fixture::new(1);
    let amount: Amount = Amount::new(UnitField::Deposit, Decimal::from(10_000)).unwrap();
    fixture.select(&[1]);
    fixture.staged = Some(StagedValue::Amount(amount));

    fixture.apply(Step::Deposit).unwrap();

    let unit = fixture.collection.get(UnitNumber::new(1)).unwrap();
    assert_eq!(unit.deposit_amount, Some(amount));
    assert_eq!(unit.rent_amount, None);
}

#[test]
fn test_blank_note_is_rejected_before_writing() {
    let mut fixture: Fixture = Fixture::new(1);
    fixture.select(&[1]);
    fixture.staged = Some(StagedValue::Note(String::from("   ")));

    let result: Result<AppliedResult, CoreError> = fixture.apply(Step::Notes);

    assert!(result.is_err());
    assert!(fixture.collection.get(UnitNumber::new(1)).unwrap().notes.is_none());
}

#[test]
fn test_reapplying_same_value_changes_nothing() {
    let mut fixture: Fixture = Fixture::new(2);
    let rent: Amount = Amount::new(UnitField::Rent, Decimal::from_str("1250.50").unwrap()).unwrap();
    fixture.select(&[1, 2]);
    fixture.staged = Some(StagedValue::Amount(rent));
    fixture.apply(Step::Rent).unwrap();
    let once: UnitCollection = fixture.collection.clone();

    fixture.selection.set_range(
        UnitNumber::new(1),
        UnitNumber::new(2),
        &fixture.collection.unit_numbers(),
    );
    fixture.staged = Some(StagedValue::Amount(rent));
    fixture.apply(Step::Rent).unwrap();

    assert_eq!(fixture.collection, once);
}
