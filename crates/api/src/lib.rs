// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API boundary layer for the employee roster.
//!
//! UI events enter here as plain data and leave as core actions. The
//! boundary validates form drafts against the current store state,
//! translates raw field strings into domain types, and keeps domain
//! errors from leaking outward unshaped.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

mod error;
mod events;
mod form;
mod handlers;

#[cfg(test)]
mod tests;

pub use error::ApiError;
pub use events::UiEvent;
pub use form::{
    EmployeeFormDraft, FieldError, FormField, FormMode, FormValidation, validate_form,
};
pub use handlers::{
    action_for_event, change_language, delete_employee, submit_employee_update,
    submit_new_employee,
};
