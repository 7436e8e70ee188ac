// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The working set of units the next bulk apply will target.

use std::collections::BTreeSet;

use unit_wizard_domain::UnitNumber;

/// Units currently staged to receive the next bulk-applied value.
///
/// Every mutation takes the set of eligible units. Ineligible units are
/// silently ignored, the same way a disabled button ignores taps.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    members: BTreeSet<UnitNumber>,
}

impl SelectionSet {
    /// Creates an empty selection.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            members: BTreeSet::new(),
        }
    }

    /// Adds or removes a unit.
    ///
    /// Returns `false` without touching the selection when the unit is not
    /// eligible.
    pub fn toggle(&mut self, unit_number: UnitNumber, eligible: &BTreeSet<UnitNumber>) -> bool {
        if !eligible.contains(&unit_number) {
            return false;
        }
        if !self.members.remove(&unit_number) {
            self.members.insert(unit_number);
        }
        true
    }

    /// Replaces the selection with every eligible unit between the two
    /// bounds, inclusive. The bounds may be given in either order.
    ///
    /// Returns the number of selected units.
    pub fn set_range(
        &mut self,
        start: UnitNumber,
        end: UnitNumber,
        eligible: &BTreeSet<UnitNumber>,
    ) -> usize {
        let (low, high) = if start <= end {
            (start, end)
        } else {
            (end, start)
        };
        self.members = eligible.range(low..=high).copied().collect();
        self.members.len()
    }

    /// Empties the selection.
    pub fn clear(&mut self) {
        self.members.clear();
    }

    /// Returns the selected unit numbers in ascending order.
    #[must_use]
    pub const fn members(&self) -> &BTreeSet<UnitNumber> {
        &self.members
    }

    /// Returns true if `unit_number` is selected.
    #[must_use]
    pub fn contains(&self, unit_number: UnitNumber) -> bool {
        self.members.contains(&unit_number)
    }

    /// Returns the number of selected units.
    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Returns true if nothing is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}
