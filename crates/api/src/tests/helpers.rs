// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::form::EmployeeFormDraft;
use roster::AppState;
use roster_domain::{Department, NewEmployee, Position};
use time::Date;
use time::macros::date;

pub const TODAY: Date = date!(2026 - 08 - 05);

pub fn create_valid_draft() -> EmployeeFormDraft {
    EmployeeFormDraft {
        id: None,
        first_name: String::from("Ada"),
        last_name: String::from("Lovelace"),
        date_of_employment: String::from("2022-03-01"),
        date_of_birth: String::from("1990-06-15"),
        phone: String::from("05321234567"),
        email: String::from("ada@company.com"),
        department: String::from("Tech"),
        position: String::from("Senior"),
    }
}

pub fn create_test_state() -> AppState {
    let existing: NewEmployee = NewEmployee {
        first_name: String::from("Grace"),
        last_name: String::from("Hopper"),
        date_of_employment: String::from("2021-01-11"),
        date_of_birth: String::from("1988-12-09"),
        phone: String::from("05329876543"),
        email: String::from("grace@company.com"),
        department: Department::Analytics,
        position: Position::Medior,
    };

    AppState {
        employees: vec![existing.with_id(1)],
        language: roster_domain::Language::En,
    }
}
