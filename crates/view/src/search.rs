// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use roster_domain::Employee;

/// Filters employees by a raw search term.
///
/// An empty term disables filtering and returns the full collection.
/// Otherwise the term is lower-cased and tested as a substring against
/// the lower-cased first name, last name, department, position, and
/// email, plus a raw substring test against the phone digits. An
/// employee passes if any field matches. Original relative order is
/// preserved.
#[must_use]
pub fn filter_employees<'a>(employees: &'a [Employee], term: &str) -> Vec<&'a Employee> {
    if term.is_empty() {
        return employees.iter().collect();
    }

    let term_lower: String = term.to_lowercase();
    employees
        .iter()
        .filter(|employee| matches_term(employee, &term_lower))
        .collect()
}

fn matches_term(employee: &Employee, term_lower: &str) -> bool {
    employee.first_name.to_lowercase().contains(term_lower)
        || employee.last_name.to_lowercase().contains(term_lower)
        || employee
            .department
            .as_str()
            .to_lowercase()
            .contains(term_lower)
        || employee
            .position
            .as_str()
            .to_lowercase()
            .contains(term_lower)
        || employee.email.to_lowercase().contains(term_lower)
        || employee.phone.contains(term_lower)
}
