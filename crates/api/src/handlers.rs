// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::ApiError;
use crate::events::UiEvent;
use crate::form::{EmployeeFormDraft, FormMode, validate_form};
use roster::{Action, AppState};
use roster_domain::{Department, DomainError, Language, NewEmployee, Position};
use std::str::FromStr;
use time::Date;

/// Translates a domain error into an API error.
///
/// The translation is explicit so domain errors are not leaked directly
/// across the boundary.
fn translate_domain_error(err: DomainError) -> ApiError {
    match err {
        DomainError::InvalidDepartment(value) => ApiError::InvalidInput {
            field: String::from("department"),
            message: format!("Unknown department: {value}"),
        },
        DomainError::InvalidPosition(value) => ApiError::InvalidInput {
            field: String::from("position"),
            message: format!("Unknown position: {value}"),
        },
        DomainError::InvalidLanguage(value) => ApiError::InvalidInput {
            field: String::from("language"),
            message: format!("Unsupported language code: {value}"),
        },
        DomainError::DateParseError { date_string, error } => ApiError::InvalidInput {
            field: String::from("date"),
            message: format!("Failed to parse date '{date_string}': {error}"),
        },
    }
}

/// Builds the delete action for a "delete requested" UI event.
///
/// Deleting an id that no longer exists is harmless: the reducer treats
/// it as a no-op.
#[must_use]
pub const fn delete_employee(id: u32) -> Action {
    Action::DeleteEmployee { id }
}

/// Handles an "add submitted" UI event.
///
/// Validates the draft in create mode against the current state (email
/// uniqueness included), parses the selection fields into domain types,
/// and builds the add action. The draft carries no id; the reducer
/// assigns one.
///
/// # Errors
///
/// Returns [`ApiError::ValidationFailed`] with the field-error map when
/// any field rule fails, or [`ApiError::InvalidInput`] when a selection
/// value is outside the allowed set.
pub fn submit_new_employee(
    draft: &EmployeeFormDraft,
    state: &AppState,
    today: Date,
) -> Result<Action, ApiError> {
    let validation = validate_form(draft, FormMode::Create, &state.employees, today);
    if !validation.is_valid() {
        return Err(ApiError::ValidationFailed { validation });
    }

    let new_employee: NewEmployee = draft_to_new_employee(draft)?;
    Ok(Action::AddEmployee {
        draft: new_employee,
    })
}

/// Handles an "edit submitted" UI event.
///
/// Validates the draft in edit mode (the email uniqueness check is
/// skipped) and builds the full-replacement update action for the
/// record id carried by the draft.
///
/// # Errors
///
/// Returns [`ApiError::InvalidInput`] when the draft carries no id,
/// [`ApiError::ValidationFailed`] when any field rule fails, or
/// [`ApiError::InvalidInput`] when a selection value is outside the
/// allowed set.
pub fn submit_employee_update(
    draft: &EmployeeFormDraft,
    state: &AppState,
    today: Date,
) -> Result<Action, ApiError> {
    let Some(id) = draft.id else {
        return Err(ApiError::InvalidInput {
            field: String::from("id"),
            message: String::from("An update requires the id of the record being edited"),
        });
    };

    let validation = validate_form(draft, FormMode::Edit, &state.employees, today);
    if !validation.is_valid() {
        return Err(ApiError::ValidationFailed { validation });
    }

    let employee = draft_to_new_employee(draft)?.with_id(id);
    Ok(Action::UpdateEmployee { employee })
}

/// Handles a "language changed" UI event.
///
/// Unknown codes produce no action, mirroring a switcher that only
/// offers the supported languages.
#[must_use]
pub fn change_language(code: &str) -> Option<Action> {
    Language::from_str(code)
        .ok()
        .map(|language| Action::SetLanguage { language })
}

/// Maps a UI event to the core action it implies, if any.
///
/// Store-mutating events yield `Some(action)`. Page and search changes
/// are view-state inputs and yield `Ok(None)`, as does a language change
/// with an unknown code.
///
/// # Errors
///
/// Returns the submission error for add/edit events whose draft fails
/// validation or carries out-of-set selection values.
pub fn action_for_event(
    event: &UiEvent,
    state: &AppState,
    today: Date,
) -> Result<Option<Action>, ApiError> {
    match event {
        UiEvent::DeleteRequested { id } => Ok(Some(delete_employee(*id))),
        UiEvent::AddSubmitted { draft } => submit_new_employee(draft, state, today).map(Some),
        UiEvent::EditSubmitted { draft } => submit_employee_update(draft, state, today).map(Some),
        UiEvent::LanguageChanged { code } => Ok(change_language(code)),
        UiEvent::PageChanged { .. } | UiEvent::SearchTermChanged { .. } => Ok(None),
    }
}

/// Converts a validated draft into the domain record, parsing the
/// selection fields into their enums.
fn draft_to_new_employee(draft: &EmployeeFormDraft) -> Result<NewEmployee, ApiError> {
    let department: Department =
        Department::parse(&draft.department).map_err(translate_domain_error)?;
    let position: Position = Position::parse(&draft.position).map_err(translate_domain_error)?;

    Ok(NewEmployee {
        first_name: draft.first_name.clone(),
        last_name: draft.last_name.clone(),
        date_of_employment: draft.date_of_employment.clone(),
        date_of_birth: draft.date_of_birth.clone(),
        phone: draft.phone.clone(),
        email: draft.email.clone(),
        department,
        position,
    })
}
