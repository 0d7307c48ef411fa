// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::form::FormValidation;
use thiserror::Error;

/// API-level errors.
///
/// These are distinct from domain errors and represent the boundary
/// contract: a blocked submission carries its field-scoped validation
/// result, and malformed input names the offending field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The submitted form failed validation; submission is blocked and
    /// the field errors are surfaced to the form.
    #[error("Form validation failed")]
    ValidationFailed {
        /// The field-scoped errors from the validation pass.
        validation: FormValidation,
    },
    /// Invalid input was provided for a field.
    #[error("Invalid input for field '{field}': {message}")]
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
}
