// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use unit_wizard::Command;
use unit_wizard_audit::Cause;
use unit_wizard_domain::UnitNumber;

use crate::{
    AuthenticatedActor, BuildingDraftRequest, Role, WizardHandle, execute, open_wizard,
};

pub fn create_test_admin() -> AuthenticatedActor {
    AuthenticatedActor::new(String::from("admin-123"), Role::Admin)
}

pub fn create_test_actor(role: Role) -> AuthenticatedActor {
    AuthenticatedActor::new(format!("{role}-456"), role)
}

pub fn create_test_cause() -> Cause {
    Cause::new(String::from("api-req-456"), String::from("API request"))
}

pub fn open_test_wizard(total_units: u32, number_of_floors: u32) -> WizardHandle {
    let request: BuildingDraftRequest = BuildingDraftRequest {
        total_units,
        number_of_floors,
    };
    let (handle, _) = open_wizard(&request, &create_test_admin(), create_test_cause())
        .expect("Failed to open wizard");
    handle
}

pub fn run(handle: &mut WizardHandle, command: Command) {
    execute(handle, command, &create_test_admin(), create_test_cause())
        .expect("Command should be accepted");
}

pub fn apply_to_range(handle: &mut WizardHandle, start: u32, end: u32) {
    run(
        handle,
        Command::SelectRange {
            start: UnitNumber::new(start),
            end: UnitNumber::new(end),
        },
    );
    run(handle, Command::Apply);
}
