// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use unit_wizard::CoreError;
use unit_wizard_domain::{DomainError, Step, UnitField};

use crate::{ApiError, AuthError, translate_core_error, translate_domain_error};

#[test]
fn test_amount_errors_name_their_field() {
    let err: ApiError = translate_domain_error(DomainError::InvalidAmount {
        field: UnitField::Deposit,
        input: String::from("abc"),
    });

    assert!(matches!(err, ApiError::InvalidInput { ref field, .. } if field == "deposit"));
}

#[test]
fn test_missing_unit_is_not_found() {
    let err: ApiError = translate_domain_error(DomainError::UnitNotFound {
        unit_number: 9,
        total_units: 4,
    });

    assert_eq!(
        err,
        ApiError::ResourceNotFound {
            resource_type: String::from("Unit"),
            message: String::from("Unit 9 not found. Units are numbered 1 to 4"),
        }
    );
}

#[test]
fn test_second_basement_is_rule_violation() {
    let err: ApiError =
        translate_core_error(CoreError::from(DomainError::BasementAlreadyDesignated {
            bottom: -2,
        }));

    assert!(matches!(err, ApiError::DomainRuleViolation { ref rule, .. } if rule == "single_basement"));
}

#[test]
fn test_precondition_failures_are_invalid_state() {
    for core_err in [
        CoreError::EmptySelection { step: Step::Rent },
        CoreError::NothingStaged { step: Step::Type },
        CoreError::SessionFinished,
    ] {
        assert!(matches!(
            translate_core_error(core_err),
            ApiError::InvalidState { .. }
        ));
    }
}

#[test]
fn test_auth_error_converts_to_api_error() {
    let err: ApiError = ApiError::from(AuthError::Unauthorized {
        action: String::from("apply"),
        required_role: String::from("Admin"),
    });

    assert_eq!(err.to_string(), "Unauthorized: 'apply' requires Admin role");
}
