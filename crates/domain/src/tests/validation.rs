// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use rust_decimal::Decimal;

use crate::{
    DomainError, Floor, UnitField, UnitNumber, parse_amount, parse_floor, validate_basement_floor,
    validate_note, validate_unit_number,
};

#[test]
fn test_parse_amount_accepts_integers_and_decimals() {
    assert_eq!(
        parse_amount(UnitField::Rent, "5000").unwrap().value(),
        Decimal::new(5000, 0)
    );
    assert_eq!(
        parse_amount(UnitField::Rent, " 1250.75 ").unwrap().value(),
        Decimal::new(125_075, 2)
    );
    assert_eq!(
        parse_amount(UnitField::Deposit, "0").unwrap().value(),
        Decimal::ZERO
    );
}

#[test]
fn test_parse_amount_rejects_non_numeric() {
    assert_eq!(
        parse_amount(UnitField::Rent, "five thousand"),
        Err(DomainError::InvalidAmount {
            field: UnitField::Rent,
            input: String::from("five thousand")
        })
    );
    assert!(parse_amount(UnitField::Rent, "").is_err());
}

#[test]
fn test_parse_amount_rejects_negative() {
    assert!(matches!(
        parse_amount(UnitField::Deposit, "-1"),
        Err(DomainError::NegativeAmount {
            field: UnitField::Deposit,
            ..
        })
    ));
}

#[test]
fn test_parse_floor() {
    assert_eq!(parse_floor("3"), Ok(Floor::new(3)));
    assert_eq!(parse_floor(" -1"), Ok(Floor::new(-1)));
    assert_eq!(
        parse_floor("ground"),
        Err(DomainError::InvalidFloor(String::from("ground")))
    );
}

#[test]
fn test_validate_note_keeps_text_as_entered() {
    assert_eq!(
        validate_note(" faces the garden "),
        Ok(String::from(" faces the garden "))
    );
    assert_eq!(validate_note(""), Err(DomainError::EmptyNote));
    assert_eq!(validate_note("\t\n"), Err(DomainError::EmptyNote));
}

#[test]
fn test_validate_basement_floor() {
    assert!(validate_basement_floor(Floor::new(-1)).is_ok());
    assert_eq!(
        validate_basement_floor(Floor::GROUND),
        Err(DomainError::InvalidBasementFloor(0))
    );
}

#[test]
fn test_validate_unit_number_bounds() {
    assert!(validate_unit_number(UnitNumber::new(1), 4).is_ok());
    assert!(validate_unit_number(UnitNumber::new(4), 4).is_ok());
    assert_eq!(
        validate_unit_number(UnitNumber::new(0), 4),
        Err(DomainError::UnitNotFound {
            unit_number: 0,
            total_units: 4
        })
    );
    assert!(validate_unit_number(UnitNumber::new(5), 4).is_err());
}
