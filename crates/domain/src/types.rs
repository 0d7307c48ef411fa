// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Represents the UI language of the application.
///
/// Exactly two languages are supported. The wire representation is the
/// two-letter lowercase code used by the persisted state snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Language {
    /// English.
    #[default]
    #[serde(rename = "en")]
    En,
    /// Turkish.
    #[serde(rename = "tr")]
    Tr,
}

impl FromStr for Language {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" => Ok(Self::En),
            "tr" => Ok(Self::Tr),
            _ => Err(DomainError::InvalidLanguage(s.to_string())),
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Language {
    /// Converts this language to its two-letter code.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Tr => "tr",
        }
    }
}

/// Represents a department an employee belongs to.
///
/// Departments are fixed domain constants; free-form department names
/// are not representable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Department {
    /// The analytics department.
    Analytics,
    /// The technology department.
    Tech,
}

impl Department {
    /// All allowed departments, in display order.
    pub const ALL: [Self; 2] = [Self::Analytics, Self::Tech];

    /// Parses a department from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the string does not match an allowed department.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        match s {
            "Analytics" => Ok(Self::Analytics),
            "Tech" => Ok(Self::Tech),
            _ => Err(DomainError::InvalidDepartment(s.to_string())),
        }
    }

    /// Returns the string representation of this department.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Analytics => "Analytics",
            Self::Tech => "Tech",
        }
    }
}

/// Represents an employee's position level.
///
/// Positions are fixed domain constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Position {
    /// Junior level.
    Junior,
    /// Medior level.
    Medior,
    /// Senior level.
    Senior,
}

impl Position {
    /// All allowed positions, in display order.
    pub const ALL: [Self; 3] = [Self::Junior, Self::Medior, Self::Senior];

    /// Parses a position from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the string does not match an allowed position.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        match s {
            "Junior" => Ok(Self::Junior),
            "Medior" => Ok(Self::Medior),
            "Senior" => Ok(Self::Senior),
            _ => Err(DomainError::InvalidPosition(s.to_string())),
        }
    }

    /// Returns the string representation of this position.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Junior => "Junior",
            Self::Medior => "Medior",
            Self::Senior => "Senior",
        }
    }
}

/// Represents a single employee record.
///
/// `id` is assigned by the store when the record is added and is
/// immutable afterwards. `email` is unique across all records; that
/// invariant is enforced at the form boundary, not here.
///
/// Dates are carried as ISO 8601 date strings (`YYYY-MM-DD`), matching
/// the persisted snapshot format. Serde field names are `camelCase` so the
/// serialized snapshot is interchangeable with the original `appState`
/// payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    /// Canonical record identifier (positive, unique, store-assigned).
    pub id: u32,
    /// The employee's first name.
    pub first_name: String,
    /// The employee's last name.
    pub last_name: String,
    /// Date of employment (ISO 8601 date string).
    pub date_of_employment: String,
    /// Date of birth (ISO 8601 date string).
    pub date_of_birth: String,
    /// Phone number as a digit string.
    pub phone: String,
    /// Email address (unique across all employees).
    pub email: String,
    /// The department this employee belongs to.
    pub department: Department,
    /// The employee's position level.
    pub position: Position,
}

/// An employee record that has not been assigned an identity yet.
///
/// Add operations carry a `NewEmployee`; the store assigns the `id`
/// when the record enters the collection. Callers must never pre-supply
/// an id, which this type makes unrepresentable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEmployee {
    /// The employee's first name.
    pub first_name: String,
    /// The employee's last name.
    pub last_name: String,
    /// Date of employment (ISO 8601 date string).
    pub date_of_employment: String,
    /// Date of birth (ISO 8601 date string).
    pub date_of_birth: String,
    /// Phone number as a digit string.
    pub phone: String,
    /// Email address.
    pub email: String,
    /// The department this employee belongs to.
    pub department: Department,
    /// The employee's position level.
    pub position: Position,
}

impl NewEmployee {
    /// Builds the persisted `Employee` once the store has assigned an id.
    #[must_use]
    pub fn with_id(&self, id: u32) -> Employee {
        Employee {
            id,
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            date_of_employment: self.date_of_employment.clone(),
            date_of_birth: self.date_of_birth.clone(),
            phone: self.phone.clone(),
            email: self.email.clone(),
            department: self.department,
            position: self.position,
        }
    }
}
