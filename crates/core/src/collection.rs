// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The canonical per-unit record store for one building in progress.

use std::collections::BTreeSet;

use unit_wizard_domain::{
    DomainError, FieldValue, MAX_TOTAL_UNITS, Unit, UnitField, UnitNumber, validate_unit_number,
};

/// Ordered store of exactly `total_units` units.
///
/// Unit `n` always lives at index `n - 1`; the length never changes after
/// [`UnitCollection::initialize`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitCollection {
    units: Vec<Unit>,
}

impl UnitCollection {
    /// Allocates units `1..=total_units` with every field unset.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidUnitCount` if `total_units` is zero or
    /// above `MAX_TOTAL_UNITS`.
    pub fn initialize(total_units: u32) -> Result<Self, DomainError> {
        if total_units == 0 || total_units > MAX_TOTAL_UNITS {
            return Err(DomainError::InvalidUnitCount(total_units));
        }
        Ok(Self {
            units: (1..=total_units)
                .map(|number| Unit::new(UnitNumber::new(number)))
                .collect(),
        })
    }

    /// Returns the number of units.
    #[must_use]
    pub fn total_units(&self) -> u32 {
        u32::try_from(self.units.len()).unwrap_or(u32::MAX)
    }

    /// Returns the unit with the given number.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::UnitNotFound` if the number is out of range.
    pub fn get(&self, unit_number: UnitNumber) -> Result<&Unit, DomainError> {
        let index: usize = self.index_of(unit_number)?;
        self.units.get(index).ok_or_else(|| self.not_found(unit_number))
    }

    /// Writes a value into one unit.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::UnitNotFound` if the number is out of range;
    /// the collection is left unchanged.
    pub fn set_field(
        &mut self,
        unit_number: UnitNumber,
        value: &FieldValue,
    ) -> Result<(), DomainError> {
        let index: usize = self.index_of(unit_number)?;
        if let Some(unit) = self.units.get_mut(index) {
            unit.write(value);
        }
        Ok(())
    }

    /// Writes the same value into every listed unit.
    ///
    /// All unit numbers are validated before any unit is written, so a
    /// rejected call leaves the collection unchanged.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::UnitNotFound` for the first out-of-range number.
    pub fn bulk_set_field<I>(
        &mut self,
        unit_numbers: I,
        value: &FieldValue,
    ) -> Result<(), DomainError>
    where
        I: IntoIterator<Item = UnitNumber>,
    {
        let indices: Vec<usize> = unit_numbers
            .into_iter()
            .map(|unit_number| self.index_of(unit_number))
            .collect::<Result<_, _>>()?;

        for index in indices {
            if let Some(unit) = self.units.get_mut(index) {
                unit.write(value);
            }
        }
        Ok(())
    }

    /// Resets `field` to unset on every unit.
    pub fn clear_field(&mut self, field: UnitField) {
        for unit in &mut self.units {
            unit.clear(field);
        }
    }

    /// Returns the numbers of units whose `field` is still unset.
    #[must_use]
    pub fn unset_unit_numbers(&self, field: UnitField) -> BTreeSet<UnitNumber> {
        self.units
            .iter()
            .filter(|unit| !unit.is_set(field))
            .map(Unit::unit_number)
            .collect()
    }

    /// Returns every unit number.
    #[must_use]
    pub fn unit_numbers(&self) -> BTreeSet<UnitNumber> {
        self.units.iter().map(Unit::unit_number).collect()
    }

    /// Returns a read-only view of every unit, ordered by unit number.
    #[must_use]
    pub fn snapshot(&self) -> &[Unit] {
        &self.units
    }

    fn index_of(&self, unit_number: UnitNumber) -> Result<usize, DomainError> {
        validate_unit_number(unit_number, self.total_units())?;
        usize::try_from(unit_number.value() - 1).map_err(|_| self.not_found(unit_number))
    }

    fn not_found(&self, unit_number: UnitNumber) -> DomainError {
        DomainError::UnitNotFound {
            unit_number: unit_number.value(),
            total_units: self.total_units(),
        }
    }
}
