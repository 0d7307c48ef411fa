// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::action::Action;
use crate::state::AppState;
use roster_domain::{Employee, NewEmployee};

/// Computes the next application state from the current state and an action.
///
/// The reducer is pure and total: it never mutates its inputs, has no
/// side effects, and every action yields a state. Downstream change
/// detection relies on the old state never being modified in place.
///
/// # Arguments
///
/// * `state` - The current state (immutable)
/// * `action` - The action to apply
///
/// # Returns
///
/// The next state. Actions that reference an id not present in the
/// collection are no-ops and return a state equal to the input.
#[must_use]
pub fn reduce(state: &AppState, action: Action) -> AppState {
    match action {
        Action::DeleteEmployee { id } => delete_employee(state, id),
        Action::AddEmployee { draft } => add_employee(state, &draft),
        Action::UpdateEmployee { employee } => update_employee(state, &employee),
        Action::SetLanguage { language } => AppState {
            employees: state.employees.clone(),
            language,
        },
    }
}

/// Removes the matching employee, preserving the order of the rest.
/// An absent id is a no-op, not an error.
fn delete_employee(state: &AppState, id: u32) -> AppState {
    if !state.employees.iter().any(|employee| employee.id == id) {
        return state.clone();
    }

    let employees: Vec<Employee> = state
        .employees
        .iter()
        .filter(|employee| employee.id != id)
        .cloned()
        .collect();

    AppState {
        employees,
        language: state.language,
    }
}

/// Appends the draft with the next id.
///
/// The id is one past the maximum id currently in the collection (not
/// the count), so ids never collide even after deletions.
fn add_employee(state: &AppState, draft: &NewEmployee) -> AppState {
    let max_id: u32 = state
        .employees
        .iter()
        .map(|employee| employee.id)
        .max()
        .unwrap_or(0);

    let mut employees: Vec<Employee> = state.employees.clone();
    employees.push(draft.with_id(max_id + 1));

    AppState {
        employees,
        language: state.language,
    }
}

/// Replaces the matching employee verbatim (full replacement, not a
/// merge), preserving relative order. No match leaves the collection
/// unchanged.
fn update_employee(state: &AppState, updated: &Employee) -> AppState {
    let employees: Vec<Employee> = state
        .employees
        .iter()
        .map(|employee| {
            if employee.id == updated.id {
                updated.clone()
            } else {
                employee.clone()
            }
        })
        .collect();

    AppState {
        employees,
        language: state.language,
    }
}
