// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use roster_domain::{Employee, Language};
use serde::{Deserialize, Serialize};

/// The complete application state.
///
/// The state is owned exclusively by the store and replaced wholesale on
/// every dispatch; nothing mutates it in place. Serde field names match
/// the persisted `appState` snapshot, so serializing and reloading the
/// state round-trips across restarts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppState {
    /// All employee records, in insertion order.
    pub employees: Vec<Employee>,
    /// The active UI language.
    pub language: Language,
}

impl AppState {
    /// Creates the default state: no employees, English UI.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            employees: Vec::new(),
            language: Language::En,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
