// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The finished building payload handed to the persistence collaborator.
//!
//! Unset values are committed as defaults: `0` for floors and amounts and
//! the empty string for the layout code and notes.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use unit_wizard_domain::{Amount, BuildingDraft, Floor, FloorPlan, Unit};

/// One unit as submitted to the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletedUnit {
    /// The unit number.
    pub unit_number: u32,
    /// The floor index.
    pub floor: i32,
    /// The layout code, or empty when never assigned.
    #[serde(rename = "type")]
    pub unit_type: String,
    /// The monthly rent.
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub rent_amount: Decimal,
    /// The security deposit.
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub deposit_amount: Decimal,
    /// Whether the unit has a balcony.
    pub has_balcony: bool,
    /// Free-text notes, or empty.
    pub notes: String,
}

impl From<&Unit> for CompletedUnit {
    fn from(unit: &Unit) -> Self {
        Self {
            unit_number: unit.unit_number().value(),
            floor: unit.floor.unwrap_or(Floor::GROUND).index(),
            unit_type: unit
                .unit_type
                .map(|unit_type| unit_type.as_str().to_string())
                .unwrap_or_default(),
            rent_amount: unit.rent_amount.unwrap_or(Amount::ZERO).value(),
            deposit_amount: unit.deposit_amount.unwrap_or(Amount::ZERO).value(),
            has_balcony: unit.has_balcony,
            notes: unit.notes.clone().unwrap_or_default(),
        }
    }
}

/// The per-unit details of a finished wizard session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletedBuildingUnits {
    /// The number of units in the building.
    pub total_units: u32,
    /// The number of ground-and-up floors.
    pub number_of_floors: u32,
    /// The lowest basement floor, if a basement was designated.
    pub basement_floor: Option<i32>,
    /// Every unit, ordered by unit number.
    pub units: Vec<CompletedUnit>,
}

impl CompletedBuildingUnits {
    /// Builds the payload from the session's units.
    #[must_use]
    pub fn from_units(draft: &BuildingDraft, floor_plan: &FloorPlan, units: &[Unit]) -> Self {
        Self {
            total_units: draft.total_units(),
            number_of_floors: draft.number_of_floors(),
            basement_floor: floor_plan.basement_bottom().map(|floor| floor.index()),
            units: units.iter().map(CompletedUnit::from).collect(),
        }
    }
}
