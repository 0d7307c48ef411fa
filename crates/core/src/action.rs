// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use roster_domain::{Employee, Language, NewEmployee};

/// An action represents user or system intent as data only.
///
/// Actions are the only way to request state changes. They are immutable
/// once constructed and carry no behavior; the reducer gives them
/// meaning. The sum type makes unknown action kinds unrepresentable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Remove the employee with the given id from the collection.
    DeleteEmployee {
        /// The id of the record to remove.
        id: u32,
    },
    /// Append a new employee record. The reducer assigns the id; callers
    /// must never supply one.
    AddEmployee {
        /// The record to add, without an identity.
        draft: NewEmployee,
    },
    /// Replace the employee whose id matches the payload, verbatim.
    UpdateEmployee {
        /// The full replacement record, including its id.
        employee: Employee,
    },
    /// Switch the UI language.
    SetLanguage {
        /// The language to switch to.
        language: Language,
    },
}
