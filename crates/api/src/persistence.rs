// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Sinks for finished building payloads.
//!
//! The backend that stores buildings is an external collaborator. The
//! wizard hands it the payload once and never inspects a response or
//! retries a failed submission.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info};
use unit_wizard::CompletedBuildingUnits;

/// Persistence collaborator errors.
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// The payload could not be serialized.
    #[error("Failed to serialize building payload: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The payload could not be written.
    #[error("Failed to write building payload to {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The backend refused the submission.
    #[error("Backend rejected the submission: {0}")]
    Rejected(String),
}

/// Receives the finished per-unit details of a building.
pub trait BuildingPersistence {
    /// Submits the payload.
    ///
    /// # Errors
    ///
    /// Returns an error if the payload could not be stored.
    fn submit_units(&mut self, payload: &CompletedBuildingUnits) -> Result<(), PersistenceError>;
}

/// Keeps every submission in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryPersistence {
    submissions: Vec<CompletedBuildingUnits>,
    reject_with: Option<String>,
}

impl InMemoryPersistence {
    /// Creates an empty sink that accepts every submission.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            submissions: Vec::new(),
            reject_with: None,
        }
    }

    /// Creates a sink that rejects every submission with `reason`.
    #[must_use]
    pub const fn rejecting(reason: String) -> Self {
        Self {
            submissions: Vec::new(),
            reject_with: Some(reason),
        }
    }

    /// Returns the accepted submissions, oldest first.
    #[must_use]
    pub fn submissions(&self) -> &[CompletedBuildingUnits] {
        &self.submissions
    }
}

impl BuildingPersistence for InMemoryPersistence {
    fn submit_units(&mut self, payload: &CompletedBuildingUnits) -> Result<(), PersistenceError> {
        if let Some(reason) = &self.reject_with {
            return Err(PersistenceError::Rejected(reason.clone()));
        }
        self.submissions.push(payload.clone());
        debug!(
            submissions = self.submissions.len(),
            "Recorded building submission in memory"
        );
        Ok(())
    }
}

/// Writes each submission to a file as pretty-printed JSON.
///
/// A later submission overwrites the file.
#[derive(Debug, Clone)]
pub struct JsonFilePersistence {
    path: PathBuf,
}

impl JsonFilePersistence {
    /// Creates a sink writing to `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the output path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl BuildingPersistence for JsonFilePersistence {
    fn submit_units(&mut self, payload: &CompletedBuildingUnits) -> Result<(), PersistenceError> {
        let json: String = serde_json::to_string_pretty(payload)?;
        std::fs::write(&self.path, json).map_err(|source| PersistenceError::Write {
            path: self.path.clone(),
            source,
        })?;
        info!(
            path = %self.path.display(),
            units = payload.units.len(),
            "Wrote building payload"
        );
        Ok(())
    }
}
