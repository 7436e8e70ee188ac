// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use rust_decimal::Decimal;

use crate::{DomainError, FieldValue, Floor, Unit, UnitField, UnitNumber, UnitType};

#[test]
fn test_new_unit_has_every_field_unset() {
    let unit: Unit = Unit::new(UnitNumber::new(3));

    assert_eq!(unit.unit_number(), UnitNumber::new(3));
    assert!(!unit.is_set(UnitField::Type));
    assert!(!unit.is_set(UnitField::Floor));
    assert!(!unit.is_set(UnitField::Rent));
    assert!(!unit.is_set(UnitField::Deposit));
    assert!(!unit.is_set(UnitField::Notes));
    assert!(!unit.has_balcony);
}

#[test]
fn test_write_then_clear_field() {
    let mut unit: Unit = Unit::new(UnitNumber::new(1));

    unit.write(&FieldValue::Floor(Floor::new(-1)));
    assert_eq!(unit.floor, Some(Floor::new(-1)));
    assert!(unit.is_set(UnitField::Floor));

    unit.clear(UnitField::Floor);
    assert_eq!(unit.floor, None);
}

#[test]
fn test_clear_balcony_resets_to_false() {
    let mut unit: Unit = Unit::new(UnitNumber::new(1));
    unit.write(&FieldValue::Balcony(true));
    assert!(unit.has_balcony);

    unit.clear(UnitField::Balcony);
    assert!(!unit.has_balcony);
}

#[test]
fn test_field_value_parse_per_field() {
    assert_eq!(
        FieldValue::parse(UnitField::Type, "2+1"),
        Ok(FieldValue::Type(UnitType::TwoPlusOne))
    );
    assert_eq!(
        FieldValue::parse(UnitField::Floor, "-2"),
        Ok(FieldValue::Floor(Floor::new(-2)))
    );
    assert_eq!(
        FieldValue::parse(UnitField::Balcony, "Yes"),
        Ok(FieldValue::Balcony(true))
    );

    let FieldValue::Rent(rent) = FieldValue::parse(UnitField::Rent, "5000").unwrap() else {
        panic!("expected a rent value");
    };
    assert_eq!(rent.value(), Decimal::new(5000, 0));

    assert_eq!(
        FieldValue::parse(UnitField::Notes, "corner unit"),
        Ok(FieldValue::Notes(String::from("corner unit")))
    );
}

#[test]
fn test_field_value_parse_rejects_invalid_input() {
    assert!(matches!(
        FieldValue::parse(UnitField::Type, "penthouse"),
        Err(DomainError::InvalidUnitType(_))
    ));
    assert!(matches!(
        FieldValue::parse(UnitField::Floor, "1.5"),
        Err(DomainError::InvalidFloor(_))
    ));
    assert!(matches!(
        FieldValue::parse(UnitField::Balcony, "maybe"),
        Err(DomainError::InvalidBalconyFlag(_))
    ));
    assert!(matches!(
        FieldValue::parse(UnitField::Deposit, "-10"),
        Err(DomainError::NegativeAmount { .. })
    ));
    assert_eq!(
        FieldValue::parse(UnitField::Notes, "   "),
        Err(DomainError::EmptyNote)
    );
}

#[test]
fn test_field_value_reports_its_field() {
    assert_eq!(FieldValue::Balcony(true).field(), UnitField::Balcony);
    assert_eq!(
        FieldValue::Notes(String::from("x")).field(),
        UnitField::Notes
    );
}
