// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur while constructing or parsing domain values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Department is not one of the allowed values.
    InvalidDepartment(String),
    /// Position is not one of the allowed values.
    InvalidPosition(String),
    /// Language code is not supported.
    InvalidLanguage(String),
    /// Failed to parse a date from a string.
    DateParseError {
        /// The invalid date string.
        date_string: String,
        /// The parsing error message.
        error: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDepartment(value) => write!(f, "Unknown department: {value}"),
            Self::InvalidPosition(value) => write!(f, "Unknown position: {value}"),
            Self::InvalidLanguage(value) => write!(f, "Unsupported language code: {value}"),
            Self::DateParseError { date_string, error } => {
                write!(f, "Failed to parse date '{date_string}': {error}")
            }
        }
    }
}

impl std::error::Error for DomainError {}
