// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Wizard operations exposed to the hosting application.
//!
//! Every operation authorizes the actor, delegates to the core crate and
//! records the resulting audit event on the handle.

use tracing::{info, warn};
use unit_wizard::{
    Command, CommandOutcome, CompletedBuildingUnits, TransitionResult, WizardSession, WizardView,
    apply,
};
use unit_wizard_audit::{Action, AuditEvent, AuditLog, Cause, StateSnapshot};
use unit_wizard_domain::{BuildingDraft, Step};

use crate::auth::{AuthenticatedActor, AuthorizationService};
use crate::error::{ApiError, translate_core_error, translate_domain_error};
use crate::persistence::BuildingPersistence;
use crate::request_response::{
    BuildingDraftRequest, ExecuteCommandResponse, FinishWizardResponse, OpenWizardResponse,
};

/// An open wizard and its audit trail.
#[derive(Debug, Clone)]
pub struct WizardHandle {
    session: WizardSession,
    audit_log: AuditLog,
}

impl WizardHandle {
    /// Returns the wizard session.
    #[must_use]
    pub const fn session(&self) -> &WizardSession {
        &self.session
    }

    /// Returns the audit events recorded for this wizard.
    #[must_use]
    pub const fn audit_log(&self) -> &AuditLog {
        &self.audit_log
    }
}

/// Opens a wizard for a new building.
///
/// # Arguments
///
/// * `request` - The building draft
/// * `authenticated_actor` - The authenticated actor performing this action
/// * `cause` - The cause or reason for this action
///
/// # Errors
///
/// Returns an error if:
/// - The actor is not authorized (not an admin)
/// - The unit count or floor count is zero
pub fn open_wizard(
    request: &BuildingDraftRequest,
    authenticated_actor: &AuthenticatedActor,
    cause: Cause,
) -> Result<(WizardHandle, OpenWizardResponse), ApiError> {
    AuthorizationService::authorize_wizard(authenticated_actor, "open_wizard")?;

    let draft: BuildingDraft = BuildingDraft::new(request.total_units, request.number_of_floors)
        .map_err(translate_domain_error)?;
    let session: WizardSession = WizardSession::open(draft).map_err(translate_core_error)?;

    let action: Action = Action::new(
        String::from("OpenWizard"),
        Some(format!(
            "Opened wizard for {} units on {} floors",
            request.total_units, request.number_of_floors
        )),
    );
    let audit_event: AuditEvent = AuditEvent::new(
        authenticated_actor.to_audit_actor(),
        cause,
        action,
        StateSnapshot::new(String::from("session=none")),
        session.to_snapshot(),
    );
    let mut audit_log: AuditLog = AuditLog::new();
    audit_log.record(audit_event);

    info!(
        actor = %authenticated_actor.id,
        total_units = request.total_units,
        number_of_floors = request.number_of_floors,
        "Opened wizard"
    );

    let response: OpenWizardResponse = OpenWizardResponse {
        total_units: request.total_units,
        number_of_floors: request.number_of_floors,
        current_step: session.current_step(),
        message: format!(
            "Configuring {} units across {} floors",
            request.total_units, request.number_of_floors
        ),
    };

    Ok((
        WizardHandle {
            session,
            audit_log,
        },
        response,
    ))
}

/// Executes one wizard command.
///
/// A rejected command leaves the handle untouched.
///
/// # Arguments
///
/// * `handle` - The open wizard
/// * `command` - The command to execute
/// * `authenticated_actor` - The authenticated actor performing this action
/// * `cause` - The cause or reason for this action
///
/// # Errors
///
/// Returns an error if:
/// - The actor is not authorized (not an admin)
/// - The command is `Finish`, which must go through `finish_and_submit`
/// - The command violates a wizard precondition
pub fn execute(
    handle: &mut WizardHandle,
    command: Command,
    authenticated_actor: &AuthenticatedActor,
    cause: Cause,
) -> Result<ExecuteCommandResponse, ApiError> {
    let action_name: &'static str = command.action_name();
    AuthorizationService::authorize_wizard(authenticated_actor, action_name)?;

    if command == Command::Finish {
        return Err(ApiError::InvalidState {
            message: String::from("Finish the wizard through finish_and_submit"),
        });
    }

    let transition: TransitionResult = apply(
        &handle.session,
        command,
        authenticated_actor.to_audit_actor(),
        cause,
    )
    .map_err(translate_core_error)?;

    let TransitionResult {
        new_session,
        outcome,
        audit_event,
    } = transition;
    handle.session = new_session;
    let event_sequence: u64 = handle.audit_log.record(audit_event);

    Ok(ExecuteCommandResponse {
        action: String::from(action_name),
        outcome,
        event_sequence,
        current_step: handle.session.current_step(),
    })
}

/// Returns the rendering view of the wizard.
///
/// # Errors
///
/// Returns an error if the actor is not authorized (not an admin).
pub fn current_view(
    handle: &WizardHandle,
    authenticated_actor: &AuthenticatedActor,
) -> Result<WizardView, ApiError> {
    AuthorizationService::authorize_wizard(authenticated_actor, "view_wizard")?;
    Ok(handle.session.view())
}

/// Finishes the wizard and submits the payload to the persistence collaborator.
///
/// The handle only moves to the finished state once the collaborator has
/// accepted the payload. A failed submission is reported and not retried.
///
/// # Arguments
///
/// * `handle` - The open wizard
/// * `persistence` - The collaborator that stores the building
/// * `authenticated_actor` - The authenticated actor performing this action
/// * `cause` - The cause or reason for this action
///
/// # Errors
///
/// Returns an error if:
/// - The actor is not authorized (not an admin)
/// - The wizard has already been finished
/// - The persistence collaborator fails
pub fn finish_and_submit<P>(
    handle: &mut WizardHandle,
    persistence: &mut P,
    authenticated_actor: &AuthenticatedActor,
    cause: Cause,
) -> Result<FinishWizardResponse, ApiError>
where
    P: BuildingPersistence + ?Sized,
{
    AuthorizationService::authorize_wizard(authenticated_actor, "finish_wizard")?;

    let transition: TransitionResult = apply(
        &handle.session,
        Command::Finish,
        authenticated_actor.to_audit_actor(),
        cause,
    )
    .map_err(translate_core_error)?;

    let TransitionResult {
        new_session,
        outcome,
        audit_event,
    } = transition;
    let CommandOutcome::Finished {
        payload,
        incomplete_steps,
    } = outcome
    else {
        return Err(ApiError::InvalidState {
            message: String::from("Finishing the wizard produced no payload"),
        });
    };

    submit(persistence, &payload)?;

    handle.session = new_session;
    let event_sequence: u64 = handle.audit_log.record(audit_event);

    let message: String = if incomplete_steps.is_empty() {
        format!("Submitted {} units", payload.units.len())
    } else {
        let names: Vec<&str> = incomplete_steps.iter().map(Step::as_str).collect();
        format!(
            "Submitted {} units with incomplete steps: {}",
            payload.units.len(),
            names.join(", ")
        )
    };

    Ok(FinishWizardResponse {
        units_submitted: payload.units.len(),
        incomplete_steps,
        event_sequence,
        message,
    })
}

fn submit<P>(persistence: &mut P, payload: &CompletedBuildingUnits) -> Result<(), ApiError>
where
    P: BuildingPersistence + ?Sized,
{
    persistence.submit_units(payload).map_err(|err| {
        warn!(error = %err, "Building submission failed");
        ApiError::from(err)
    })
}
