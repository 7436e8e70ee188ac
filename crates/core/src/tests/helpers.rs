// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::collections::BTreeSet;

use crate::WizardSession;
use unit_wizard_audit::{Actor, Cause};
use unit_wizard_domain::{BuildingDraft, UnitNumber};

pub fn create_test_actor() -> Actor {
    Actor::new(String::from("admin-123"), String::from("admin"))
}

pub fn create_test_cause() -> Cause {
    Cause::new(String::from("req-456"), String::from("Admin request"))
}

pub fn open_session(total_units: u32, number_of_floors: u32) -> WizardSession {
    let draft: BuildingDraft = BuildingDraft::new(total_units, number_of_floors).unwrap();
    WizardSession::open(draft).unwrap()
}

pub fn units(numbers: &[u32]) -> BTreeSet<UnitNumber> {
    numbers.iter().copied().map(UnitNumber::new).collect()
}
