// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Floor range generation and navigation.
//!
//! A plan starts as the ground-and-up range `[0, N)`. It can be extended
//! once with a contiguous basement range; the ground-and-up floors are
//! never renumbered.

use crate::error::DomainError;
use crate::types::{Floor, MAX_FLOORS};
use crate::validation::validate_basement_floor;
use serde::{Deserialize, Serialize};

/// Direction of travel through a floor plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Towards higher floors.
    Up,
    /// Towards lower floors.
    Down,
}

/// The ordered set of floors units may be assigned to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FloorPlan {
    floors: Vec<Floor>,
    basement_bottom: Option<Floor>,
}

impl FloorPlan {
    /// Generates the ground-and-up plan `[0, 1, ..., number_of_floors - 1]`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidFloorCount` if `number_of_floors` is zero
    /// or above `MAX_FLOORS`.
    pub fn generate(number_of_floors: u32) -> Result<Self, DomainError> {
        if number_of_floors == 0 || number_of_floors > MAX_FLOORS {
            return Err(DomainError::InvalidFloorCount(number_of_floors));
        }
        let top: i32 = i32::try_from(number_of_floors)
            .map_err(|_| DomainError::InvalidFloorCount(number_of_floors))?;
        Ok(Self {
            floors: (0..top).map(Floor::new).collect(),
            basement_bottom: None,
        })
    }

    /// Returns a plan with the basement range `[bottom, -1]` prepended.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `bottom` is not below ground or is deeper than `MAX_BASEMENT_DEPTH`
    /// - this plan has already been extended
    pub fn extend_with_basement(&self, bottom: Floor) -> Result<Self, DomainError> {
        if let Some(existing) = self.basement_bottom {
            return Err(DomainError::BasementAlreadyDesignated {
                bottom: existing.index(),
            });
        }
        validate_basement_floor(bottom)?;

        let floors: Vec<Floor> = (bottom.index()..0)
            .map(Floor::new)
            .chain(self.floors.iter().copied())
            .collect();

        Ok(Self {
            floors,
            basement_bottom: Some(bottom),
        })
    }

    /// Returns the floor adjacent to `current` in `direction`.
    ///
    /// Movement is clamped at both ends of the plan: stepping past the top
    /// or bottom returns the end floor unchanged. A `current` floor outside
    /// the plan is clamped to the nearest end first.
    #[must_use]
    pub fn step(&self, current: Floor, direction: Direction) -> Floor {
        let lowest: Floor = self.lowest();
        let highest: Floor = self.highest();
        if current < lowest {
            return lowest;
        }
        if current > highest {
            return highest;
        }

        let Some(position) = self.floors.iter().position(|floor| *floor == current) else {
            return current;
        };

        let next: Option<&Floor> = match direction {
            Direction::Up => self.floors.get(position + 1),
            Direction::Down => position
                .checked_sub(1)
                .and_then(|index| self.floors.get(index)),
        };
        next.copied().unwrap_or(current)
    }

    /// Validates that `floor` belongs to this plan.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::FloorNotInPlan` if it does not.
    pub fn validate_floor(&self, floor: Floor) -> Result<(), DomainError> {
        if self.contains(floor) {
            return Ok(());
        }
        Err(DomainError::FloorNotInPlan {
            floor: floor.index(),
            lowest: self.lowest().index(),
            highest: self.highest().index(),
        })
    }

    /// Returns the floors in ascending order.
    #[must_use]
    pub fn floors(&self) -> &[Floor] {
        &self.floors
    }

    /// Returns true if `floor` belongs to this plan.
    #[must_use]
    pub fn contains(&self, floor: Floor) -> bool {
        self.floors.contains(&floor)
    }

    /// Returns the lowest floor.
    #[must_use]
    pub fn lowest(&self) -> Floor {
        self.floors.first().copied().unwrap_or(Floor::GROUND)
    }

    /// Returns the highest floor.
    #[must_use]
    pub fn highest(&self) -> Floor {
        self.floors.last().copied().unwrap_or(Floor::GROUND)
    }

    /// Returns the basement bottom floor if one has been designated.
    #[must_use]
    pub const fn basement_bottom(&self) -> Option<Floor> {
        self.basement_bottom
    }

    /// Returns true if a basement has been designated.
    #[must_use]
    pub const fn is_extended(&self) -> bool {
        self.basement_bottom.is_some()
    }

    /// Returns the number of floors in the plan.
    #[must_use]
    pub fn len(&self) -> usize {
        self.floors.len()
    }

    /// Returns true if the plan has no floors.
    ///
    /// Plans built through [`FloorPlan::generate`] are never empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.floors.is_empty()
    }
}
