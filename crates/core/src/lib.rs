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

mod apply;
mod collection;
mod command;
mod engine;
mod error;
mod payload;
mod selection;
mod sequencer;
mod session;
mod staged;
mod state;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use apply::apply;
pub use collection::UnitCollection;
pub use command::Command;
pub use engine::{AppliedResult, bulk_apply};
pub use error::CoreError;
pub use payload::{CompletedBuildingUnits, CompletedUnit};
pub use selection::SelectionSet;
pub use sequencer::{StepProgress, StepSequencer};
pub use session::WizardSession;
pub use staged::StagedValue;
pub use state::{CommandOutcome, TransitionResult, WizardView};
