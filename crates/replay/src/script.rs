// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Replay scripts: a building draft plus the commands to run against it.

use std::path::Path;

use color_eyre::{Result, eyre::Context};
use serde::Deserialize;
use unit_wizard::Command;
use unit_wizard_api::BuildingDraftRequest;

/// A scripted wizard run.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ReplayScript {
    /// The building to open the wizard for.
    pub building: BuildingDraftRequest,
    /// The commands to execute, in order.
    #[serde(default)]
    pub commands: Vec<Command>,
}

impl ReplayScript {
    /// Reads and parses a script file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a valid script.
    pub fn load(path: &Path) -> Result<Self> {
        let contents: String = std::fs::read_to_string(path)
            .wrap_err_with(|| format!("Failed to read script {}", path.display()))?;
        Self::parse(&contents)
            .wrap_err_with(|| format!("Failed to parse script {}", path.display()))
    }

    /// Parses a script from JSON text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not a valid script.
    pub fn parse(contents: &str) -> Result<Self> {
        Ok(serde_json::from_str(contents)?)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used)]

    use std::io::Write;

    use unit_wizard::Command;

    use super::ReplayScript;

    const SCRIPT: &str = r#"{
        "building": { "totalUnits": 2, "numberOfFloors": 1 },
        "commands": [
            { "command": "select_type", "unit_type": "1+1" },
            { "command": "select_range", "start": 1, "end": 2 },
            { "command": "apply" },
            { "command": "finish" }
        ]
    }"#;

    #[test]
    fn test_parse_reads_building_and_commands() {
        let script: ReplayScript = ReplayScript::parse(SCRIPT).unwrap();

        assert_eq!(script.building.total_units, 2);
        assert_eq!(script.commands.len(), 4);
        assert!(matches!(script.commands[0], Command::SelectType { .. }));
        assert_eq!(script.commands[3], Command::Finish);
    }

    #[test]
    fn test_bundled_script_parses() {
        let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("scripts/four_units.json");

        let script: ReplayScript = ReplayScript::load(&path).unwrap();

        assert_eq!(script.building.total_units, 4);
        assert_eq!(script.commands.last(), Some(&Command::Finish));
    }

    #[test]
    fn test_commands_default_to_empty() {
        let script: ReplayScript =
            ReplayScript::parse(r#"{"building": {"totalUnits": 1, "numberOfFloors": 1}}"#).unwrap();

        assert!(script.commands.is_empty());
    }

    #[test]
    fn test_load_reports_unknown_command() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"building": {{"totalUnits": 1, "numberOfFloors": 1}}, "commands": [{{"command": "jump"}}]}}"#
        )
        .unwrap();

        let err = ReplayScript::load(file.path()).unwrap_err();

        assert!(err.to_string().starts_with("Failed to parse script"));
    }
}
