// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use roster_domain::{Department, NewEmployee, Position};

pub fn create_test_draft(name: &str) -> NewEmployee {
    NewEmployee {
        first_name: name.to_string(),
        last_name: String::from("Doe"),
        date_of_employment: String::from("2022-03-01"),
        date_of_birth: String::from("1990-06-15"),
        phone: String::from("05321234567"),
        email: format!("{}@company.com", name.to_lowercase()),
        department: Department::Tech,
        position: Position::Junior,
    }
}
