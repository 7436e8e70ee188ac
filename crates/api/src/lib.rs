// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod auth;
mod error;
mod handlers;
mod persistence;
mod request_response;

#[cfg(test)]
mod tests;

pub use auth::{AuthenticatedActor, AuthorizationService, Role, authenticate_stub};
pub use error::{ApiError, AuthError, translate_core_error, translate_domain_error};
pub use handlers::{WizardHandle, current_view, execute, finish_and_submit, open_wizard};
pub use persistence::{
    BuildingPersistence, InMemoryPersistence, JsonFilePersistence, PersistenceError,
};
pub use request_response::{
    BuildingDraftRequest, ExecuteCommandResponse, FinishWizardResponse, OpenWizardResponse,
};
