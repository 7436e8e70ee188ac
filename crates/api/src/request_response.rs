// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Request and response DTOs for the wizard API.
//!
//! These types are distinct from domain types and represent the API contract.

use serde::{Deserialize, Serialize};
use unit_wizard::CommandOutcome;
use unit_wizard_domain::Step;

/// API request to open a wizard for a new building.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildingDraftRequest {
    /// The number of units in the building.
    pub total_units: u32,
    /// The number of ground-and-up floors.
    pub number_of_floors: u32,
}

/// API response for a successfully opened wizard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenWizardResponse {
    /// The number of units in the building.
    pub total_units: u32,
    /// The number of ground-and-up floors.
    pub number_of_floors: u32,
    /// The step the wizard starts on.
    pub current_step: Step,
    /// A success message.
    pub message: String,
}

/// API response for an accepted wizard command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecuteCommandResponse {
    /// The audit action name of the command.
    pub action: String,
    /// What the command did.
    pub outcome: CommandOutcome,
    /// The sequence number of the recorded audit event.
    pub event_sequence: u64,
    /// The active step after the command.
    pub current_step: Step,
}

/// API response for a finished and submitted wizard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FinishWizardResponse {
    /// The number of units handed to the persistence collaborator.
    pub units_submitted: usize,
    /// Mandatory steps that were still incomplete when finishing.
    pub incomplete_steps: Vec<Step>,
    /// The sequence number of the recorded audit event.
    pub event_sequence: u64,
    /// A success message.
    pub message: String,
}
