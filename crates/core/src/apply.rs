// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use unit_wizard_audit::{Action, Actor, AuditEvent, Cause, StateSnapshot};
use unit_wizard_domain::{Amount, Floor, Step};

use crate::command::Command;
use crate::engine::AppliedResult;
use crate::error::CoreError;
use crate::payload::CompletedBuildingUnits;
use crate::session::WizardSession;
use crate::staged::StagedValue;
use crate::state::{CommandOutcome, TransitionResult};

/// Applies a command to a wizard session, producing a new session and audit event.
///
/// The input session is never modified. A rejected command produces no
/// audit event.
///
/// # Arguments
///
/// * `session` - The current session (immutable)
/// * `command` - The command to apply
/// * `actor` - The actor performing this action
/// * `cause` - The cause or reason for this action
///
/// # Returns
///
/// * `Ok(TransitionResult)` containing the new session, outcome and audit event
/// * `Err(CoreError)` if the command is invalid
///
/// # Errors
///
/// Returns an error if:
/// - The session has already been finished
/// - A staged value does not belong to the active step
/// - A staged value fails validation
/// - A bulk apply precondition fails
/// - A basement is designated twice or above ground
#[allow(clippy::too_many_lines)]
pub fn apply(
    session: &WizardSession,
    command: Command,
    actor: Actor,
    cause: Cause,
) -> Result<TransitionResult, CoreError> {
    let before: StateSnapshot = session.to_snapshot();
    let action_name: &'static str = command.action_name();
    let mut new_session: WizardSession = session.clone();

    let (outcome, details): (CommandOutcome, String) = match command {
        Command::SelectType { unit_type } => {
            new_session.select_type(unit_type)?;
            staged_outcome(StagedValue::Type(unit_type), format!("Staged type {unit_type}"))
        }
        Command::SelectFloor { floor } => {
            new_session.select_floor(floor)?;
            staged_outcome(StagedValue::Floor(floor), format!("Staged floor {floor}"))
        }
        Command::StageAmount { amount } => {
            let step: Step = new_session.current_step();
            let parsed: Amount = new_session.stage_amount(&amount)?;
            staged_outcome(
                StagedValue::Amount(parsed),
                format!("Staged {step} amount {parsed}"),
            )
        }
        Command::StageNote { note } => {
            new_session.stage_note(&note)?;
            let details: String = format!("Staged note '{note}'");
            staged_outcome(StagedValue::Note(note), details)
        }
        Command::ToggleUnit { unit_number } => {
            let changed: bool = new_session.toggle_unit(unit_number)?;
            let details: String = if changed {
                format!("Toggled unit {unit_number}")
            } else {
                format!("Unit {unit_number} is not eligible; selection unchanged")
            };
            (
                CommandOutcome::SelectionChanged {
                    selected: new_session.selection().len(),
                    changed,
                },
                details,
            )
        }
        Command::SelectRange { start, end } => {
            let selected: usize = new_session.select_range(start, end)?;
            (
                CommandOutcome::SelectionChanged {
                    selected,
                    changed: true,
                },
                format!("Selected {selected} units between {start} and {end}"),
            )
        }
        Command::ClearSelection => {
            new_session.clear_selection()?;
            (
                CommandOutcome::SelectionChanged {
                    selected: 0,
                    changed: true,
                },
                String::from("Cleared selection"),
            )
        }
        Command::Apply => {
            let result: AppliedResult = new_session.apply()?;
            let details: String = format!(
                "Applied {} step to {} units ({} unassigned)",
                result.step,
                result.applied_to.len(),
                result.remaining_unassigned
            );
            (CommandOutcome::Applied(result), details)
        }
        Command::Advance => {
            let step: Step = new_session.advance()?;
            (
                CommandOutcome::StepChanged { step },
                format!("Moved to {step} step"),
            )
        }
        Command::Retreat => {
            let step: Step = new_session.retreat()?;
            (
                CommandOutcome::StepChanged { step },
                format!("Moved back to {step} step"),
            )
        }
        Command::ResetStep { step } => {
            new_session.reset_step(step)?;
            (
                CommandOutcome::StepReset { step },
                format!("Reset {step} step"),
            )
        }
        Command::DesignateBasement { bottom_floor } => {
            let floors: Vec<Floor> = new_session.designate_basement(bottom_floor)?.floors().to_vec();
            let details: String = format!(
                "Designated basement down to floor {bottom_floor} ({} floors)",
                floors.len()
            );
            (CommandOutcome::BasementDesignated { floors }, details)
        }
        Command::Finish => {
            let incomplete_steps: Vec<Step> = new_session.incomplete_mandatory_steps();
            let payload: CompletedBuildingUnits = new_session.finish()?;
            let details: String = if incomplete_steps.is_empty() {
                format!("Finished with {} units", payload.units.len())
            } else {
                let names: Vec<&str> = incomplete_steps.iter().map(Step::as_str).collect();
                format!(
                    "Finished with {} units; incomplete steps: {}",
                    payload.units.len(),
                    names.join(",")
                )
            };
            (
                CommandOutcome::Finished {
                    payload,
                    incomplete_steps,
                },
                details,
            )
        }
    };

    let after: StateSnapshot = new_session.to_snapshot();
    let action: Action = Action::new(String::from(action_name), Some(details));
    let audit_event: AuditEvent = AuditEvent::new(actor, cause, action, before, after);

    Ok(TransitionResult {
        new_session,
        outcome,
        audit_event,
    })
}

/// Convenience for the staging commands.
fn staged_outcome(value: StagedValue, details: String) -> (CommandOutcome, String) {
    (CommandOutcome::Staged { value }, details)
}
