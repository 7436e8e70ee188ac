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

mod error;
mod floor_plan;
mod step;
mod types;
mod unit;
mod validation;

#[cfg(test)]
mod tests;

pub use error::{DomainError, ErrorKind};
pub use floor_plan::{Direction, FloorPlan};
pub use step::Step;
pub use types::{
    Amount, BuildingDraft, Floor, MAX_BASEMENT_DEPTH, MAX_FLOORS, MAX_TOTAL_UNITS, UnitField,
    UnitNumber, UnitType,
};
pub use unit::{FieldValue, Unit};
pub use validation::{
    parse_amount, parse_floor, validate_basement_floor, validate_note, validate_unit_number,
};
