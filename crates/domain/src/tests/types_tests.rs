// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{Department, DomainError, Employee, Language, NewEmployee, Position};
use std::str::FromStr;

fn create_test_draft() -> NewEmployee {
    NewEmployee {
        first_name: String::from("Jane"),
        last_name: String::from("Doe"),
        date_of_employment: String::from("2022-03-01"),
        date_of_birth: String::from("1990-06-15"),
        phone: String::from("05321234567"),
        email: String::from("jane@company.com"),
        department: Department::Analytics,
        position: Position::Medior,
    }
}

#[test]
fn test_department_parse_round_trips() {
    for department in Department::ALL {
        assert_eq!(Department::parse(department.as_str()).unwrap(), department);
    }
}

#[test]
fn test_department_parse_rejects_unknown() {
    let result: Result<Department, DomainError> = Department::parse("Marketing");
    assert!(matches!(result, Err(DomainError::InvalidDepartment(_))));
}

#[test]
fn test_position_parse_round_trips() {
    for position in Position::ALL {
        assert_eq!(Position::parse(position.as_str()).unwrap(), position);
    }
}

#[test]
fn test_position_parse_rejects_unknown() {
    let result: Result<Position, DomainError> = Position::parse("Principal");
    assert!(matches!(result, Err(DomainError::InvalidPosition(_))));
}

#[test]
fn test_language_from_str() {
    assert_eq!(Language::from_str("en").unwrap(), Language::En);
    assert_eq!(Language::from_str("tr").unwrap(), Language::Tr);
    assert!(matches!(
        Language::from_str("de"),
        Err(DomainError::InvalidLanguage(_))
    ));
}

#[test]
fn test_language_default_is_english() {
    assert_eq!(Language::default(), Language::En);
}

#[test]
fn test_with_id_preserves_all_draft_fields() {
    let draft: NewEmployee = create_test_draft();
    let employee: Employee = draft.with_id(7);

    assert_eq!(employee.id, 7);
    assert_eq!(employee.first_name, draft.first_name);
    assert_eq!(employee.last_name, draft.last_name);
    assert_eq!(employee.date_of_employment, draft.date_of_employment);
    assert_eq!(employee.date_of_birth, draft.date_of_birth);
    assert_eq!(employee.phone, draft.phone);
    assert_eq!(employee.email, draft.email);
    assert_eq!(employee.department, draft.department);
    assert_eq!(employee.position, draft.position);
}

#[test]
fn test_employee_serializes_with_camel_case_fields() {
    let employee: Employee = create_test_draft().with_id(1);
    let json: String = serde_json::to_string(&employee).unwrap();

    assert!(json.contains("\"firstName\":\"Jane\""));
    assert!(json.contains("\"dateOfEmployment\":\"2022-03-01\""));
    assert!(json.contains("\"department\":\"Analytics\""));
    assert!(json.contains("\"position\":\"Medior\""));
}

#[test]
fn test_language_serializes_as_lowercase_code() {
    assert_eq!(serde_json::to_string(&Language::Tr).unwrap(), "\"tr\"");
    let parsed: Language = serde_json::from_str("\"en\"").unwrap();
    assert_eq!(parsed, Language::En);
}
