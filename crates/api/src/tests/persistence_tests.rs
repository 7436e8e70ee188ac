// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::str::FromStr;

use rust_decimal::Decimal;
use unit_wizard::{CompletedBuildingUnits, CompletedUnit};

use crate::{
    BuildingPersistence, InMemoryPersistence, JsonFilePersistence, PersistenceError,
    WizardHandle, finish_and_submit,
};

use super::helpers::{create_test_admin, create_test_cause, open_test_wizard};

#[test]
fn test_json_file_persistence_writes_camel_case_payload() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("building.json");
    let mut persistence: JsonFilePersistence = JsonFilePersistence::new(&path);
    let mut handle: WizardHandle = open_test_wizard(3, 2);

    finish_and_submit(
        &mut handle,
        &mut persistence,
        &create_test_admin(),
        create_test_cause(),
    )
    .expect("Finish should succeed");

    let written: String = std::fs::read_to_string(&path).expect("Payload file missing");
    let json: serde_json::Value = serde_json::from_str(&written).expect("Invalid JSON");
    let first = &json["units"][0];
    assert_eq!(first["unitNumber"], 1);
    assert_eq!(first["type"], "");
    assert_eq!(first["rentAmount"], 0.0);
    assert_eq!(first["hasBalcony"], false);
    assert_eq!(json["totalUnits"], 3);

    let parsed: CompletedBuildingUnits =
        serde_json::from_str(&written).expect("Payload should parse back");
    assert_eq!(parsed.units.len(), 3);
}

#[test]
fn test_json_file_persistence_keeps_every_amount_digit() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("building.json");
    let mut persistence: JsonFilePersistence = JsonFilePersistence::new(&path);
    let rent: Decimal = Decimal::from_str("12345678901234567.89").expect("Invalid decimal");
    let payload: CompletedBuildingUnits = CompletedBuildingUnits {
        total_units: 1,
        number_of_floors: 1,
        basement_floor: None,
        units: vec![CompletedUnit {
            unit_number: 1,
            floor: 0,
            unit_type: String::from("2+1"),
            rent_amount: rent,
            deposit_amount: Decimal::new(1050, 2),
            has_balcony: false,
            notes: String::new(),
        }],
    };

    persistence.submit_units(&payload).expect("Submit should succeed");

    let written: String = std::fs::read_to_string(&path).expect("Payload file missing");
    assert!(written.contains("\"rentAmount\": 12345678901234567.89"));
    assert!(written.contains("\"depositAmount\": 10.50"));
    let parsed: CompletedBuildingUnits =
        serde_json::from_str(&written).expect("Payload should parse back");
    assert_eq!(parsed.units[0].rent_amount, rent);
}

#[test]
fn test_json_file_persistence_reports_write_failure() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("missing").join("building.json");
    let mut persistence: JsonFilePersistence = JsonFilePersistence::new(&path);
    let payload: CompletedBuildingUnits = CompletedBuildingUnits {
        total_units: 0,
        number_of_floors: 1,
        basement_floor: None,
        units: Vec::new(),
    };

    let result: Result<(), PersistenceError> = persistence.submit_units(&payload);

    assert!(matches!(result, Err(PersistenceError::Write { .. })));
    assert_eq!(persistence.path(), path.as_path());
}

#[test]
fn test_in_memory_persistence_can_be_used_as_trait_object() {
    let mut persistence: InMemoryPersistence = InMemoryPersistence::new();
    let mut handle: WizardHandle = open_test_wizard(1, 1);
    let sink: &mut dyn BuildingPersistence = &mut persistence;

    finish_and_submit(&mut handle, sink, &create_test_admin(), create_test_cause())
        .expect("Finish should succeed");

    assert_eq!(persistence.submissions().len(), 1);
}
