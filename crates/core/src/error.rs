// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use unit_wizard_domain::{DomainError, ErrorKind, Step};

/// Errors that can occur while driving a wizard session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A domain rule was violated.
    DomainViolation(DomainError),
    /// A bulk apply was requested with nothing selected.
    EmptySelection {
        /// The step being applied.
        step: Step,
    },
    /// A bulk apply was requested before a value was staged.
    NothingStaged {
        /// The step being applied.
        step: Step,
    },
    /// The staged value does not belong to the step.
    StagedValueMismatch {
        /// The step the value was offered to.
        step: Step,
        /// The kind of value that was offered.
        staged: &'static str,
    },
    /// The session has already been finished.
    SessionFinished,
}

impl CoreError {
    /// Returns the kind of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::DomainViolation(err) => err.kind(),
            Self::EmptySelection { .. }
            | Self::NothingStaged { .. }
            | Self::StagedValueMismatch { .. }
            | Self::SessionFinished => ErrorKind::InvalidState,
        }
    }
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainViolation(err) => write!(f, "Domain violation: {err}"),
            Self::EmptySelection { step } => {
                write!(f, "Cannot apply the {step} step: no units are selected")
            }
            Self::NothingStaged { step } => {
                write!(f, "Cannot apply the {step} step: no value has been staged")
            }
            Self::StagedValueMismatch { step, staged } => {
                write!(f, "A {staged} value cannot be staged for the {step} step")
            }
            Self::SessionFinished => write!(f, "The wizard session has already been finished"),
        }
    }
}

impl std::error::Error for CoreError {}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        Self::DomainViolation(err)
    }
}
