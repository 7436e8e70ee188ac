// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tests that only admins may drive the wizard.

use unit_wizard::Command;

use crate::{
    ApiError, AuthError, BuildingDraftRequest, InMemoryPersistence, Role, WizardHandle,
    authenticate_stub, current_view, execute, finish_and_submit, open_wizard,
};

use super::helpers::{create_test_actor, create_test_cause, open_test_wizard};

const NON_ADMIN_ROLES: [Role; 3] = [Role::Tenant, Role::Owner, Role::Worker];

#[test]
fn test_open_wizard_rejects_non_admins() {
    let request: BuildingDraftRequest = BuildingDraftRequest {
        total_units: 4,
        number_of_floors: 2,
    };

    for role in NON_ADMIN_ROLES {
        let result = open_wizard(&request, &create_test_actor(role), create_test_cause());

        assert_eq!(
            result.map(|_| ()).unwrap_err(),
            ApiError::Unauthorized {
                action: String::from("open_wizard"),
                required_role: String::from("Admin"),
            }
        );
    }
}

#[test]
fn test_execute_rejects_non_admins_without_changing_session() {
    let mut handle: WizardHandle = open_test_wizard(2, 1);
    let events_before: usize = handle.audit_log().len();

    for role in NON_ADMIN_ROLES {
        let result = execute(
            &mut handle,
            Command::Advance,
            &create_test_actor(role),
            create_test_cause(),
        );

        assert!(matches!(result, Err(ApiError::Unauthorized { .. })));
    }

    assert_eq!(handle.audit_log().len(), events_before);
    assert_eq!(handle.session().current_step().as_str(), "type");
}

#[test]
fn test_finish_rejects_non_admins() {
    let mut handle: WizardHandle = open_test_wizard(2, 1);
    let mut persistence: InMemoryPersistence = InMemoryPersistence::new();

    let result = finish_and_submit(
        &mut handle,
        &mut persistence,
        &create_test_actor(Role::Owner),
        create_test_cause(),
    );

    assert!(matches!(result, Err(ApiError::Unauthorized { .. })));
    assert!(persistence.submissions().is_empty());
    assert!(!handle.session().is_finished());
}

#[test]
fn test_view_rejects_non_admins() {
    let handle: WizardHandle = open_test_wizard(2, 1);

    let result = current_view(&handle, &create_test_actor(Role::Tenant));

    assert!(matches!(result, Err(ApiError::Unauthorized { .. })));
}

#[test]
fn test_authenticate_stub_requires_identity() {
    assert_eq!(
        authenticate_stub(String::from("  "), Role::Admin),
        Err(AuthError::AuthenticationFailed {
            reason: String::from("Actor ID cannot be empty"),
        })
    );

    let actor = authenticate_stub(String::from("admin-1"), Role::Admin)
        .expect("Authentication should succeed");
    assert_eq!(actor.to_audit_actor().role, "admin");
}
