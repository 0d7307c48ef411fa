// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::ApiError;
use crate::events::UiEvent;
use crate::form::{EmployeeFormDraft, FieldError, FormField};
use crate::handlers::{
    action_for_event, change_language, delete_employee, submit_employee_update,
    submit_new_employee,
};
use crate::tests::helpers::{TODAY, create_test_state, create_valid_draft};
use roster::{Action, AppState};
use roster_domain::{Department, Language, Position};

#[test]
fn test_delete_maps_to_the_delete_action() {
    assert_eq!(delete_employee(7), Action::DeleteEmployee { id: 7 });
}

#[test]
fn test_submit_new_employee_builds_an_add_action() {
    let state: AppState = create_test_state();

    let action: Action = submit_new_employee(&create_valid_draft(), &state, TODAY).unwrap();

    let Action::AddEmployee { draft } = action else {
        panic!("expected an add action");
    };
    assert_eq!(draft.first_name, "Ada");
    assert_eq!(draft.department, Department::Tech);
    assert_eq!(draft.position, Position::Senior);
}

#[test]
fn test_submit_new_employee_blocks_an_invalid_draft() {
    let state: AppState = create_test_state();
    let mut draft: EmployeeFormDraft = create_valid_draft();
    draft.phone = String::from("123");

    let result: Result<Action, ApiError> = submit_new_employee(&draft, &state, TODAY);

    let Err(ApiError::ValidationFailed { validation }) = result else {
        panic!("expected a validation failure");
    };
    assert_eq!(
        validation.error(FormField::Phone),
        Some(FieldError::InvalidPhone)
    );
}

#[test]
fn test_submit_new_employee_blocks_a_duplicate_email() {
    let state: AppState = create_test_state();
    let mut draft: EmployeeFormDraft = create_valid_draft();
    draft.email = String::from("grace@company.com");

    let result: Result<Action, ApiError> = submit_new_employee(&draft, &state, TODAY);

    let Err(ApiError::ValidationFailed { validation }) = result else {
        panic!("expected a validation failure");
    };
    assert_eq!(
        validation.error(FormField::Email),
        Some(FieldError::DuplicateEmail)
    );
}

#[test]
fn test_submit_new_employee_rejects_out_of_set_department() {
    // "Marketing" is non-empty, so the required rule passes; membership
    // is enforced when the selection parses into the domain enum.
    let state: AppState = create_test_state();
    let mut draft: EmployeeFormDraft = create_valid_draft();
    draft.department = String::from("Marketing");

    let result: Result<Action, ApiError> = submit_new_employee(&draft, &state, TODAY);

    let Err(ApiError::InvalidInput { field, message }) = result else {
        panic!("expected an invalid-input error");
    };
    assert_eq!(field, "department");
    assert!(message.contains("Marketing"));
}

#[test]
fn test_submit_update_requires_an_id() {
    let state: AppState = create_test_state();
    let draft: EmployeeFormDraft = create_valid_draft();

    let result: Result<Action, ApiError> = submit_employee_update(&draft, &state, TODAY);

    let Err(ApiError::InvalidInput { field, .. }) = result else {
        panic!("expected an invalid-input error");
    };
    assert_eq!(field, "id");
}

#[test]
fn test_submit_update_builds_a_full_replacement_action() {
    let state: AppState = create_test_state();
    let mut draft: EmployeeFormDraft = create_valid_draft();
    draft.id = Some(1);
    // Keeping the record's own email is fine in edit mode.
    draft.email = String::from("grace@company.com");

    let action: Action = submit_employee_update(&draft, &state, TODAY).unwrap();

    let Action::UpdateEmployee { employee } = action else {
        panic!("expected an update action");
    };
    assert_eq!(employee.id, 1);
    assert_eq!(employee.first_name, "Ada");
    assert_eq!(employee.email, "grace@company.com");
}

#[test]
fn test_change_language_accepts_known_codes_only() {
    assert_eq!(
        change_language("tr"),
        Some(Action::SetLanguage {
            language: Language::Tr
        })
    );
    assert_eq!(change_language("de"), None);
    assert_eq!(change_language(""), None);
}

#[test]
fn test_store_mutating_events_map_to_actions() {
    let state: AppState = create_test_state();

    let delete: Option<Action> =
        action_for_event(&UiEvent::DeleteRequested { id: 1 }, &state, TODAY).unwrap();
    assert_eq!(delete, Some(Action::DeleteEmployee { id: 1 }));

    let add: Option<Action> = action_for_event(
        &UiEvent::AddSubmitted {
            draft: create_valid_draft(),
        },
        &state,
        TODAY,
    )
    .unwrap();
    assert!(matches!(add, Some(Action::AddEmployee { .. })));

    let language: Option<Action> = action_for_event(
        &UiEvent::LanguageChanged {
            code: String::from("tr"),
        },
        &state,
        TODAY,
    )
    .unwrap();
    assert!(matches!(language, Some(Action::SetLanguage { .. })));
}

#[test]
fn test_view_state_events_produce_no_action() {
    let state: AppState = create_test_state();

    let page: Option<Action> =
        action_for_event(&UiEvent::PageChanged { page: 3 }, &state, TODAY).unwrap();
    assert_eq!(page, None);

    let search: Option<Action> = action_for_event(
        &UiEvent::SearchTermChanged {
            term: String::from("tech"),
        },
        &state,
        TODAY,
    )
    .unwrap();
    assert_eq!(search, None);

    let unknown_language: Option<Action> = action_for_event(
        &UiEvent::LanguageChanged {
            code: String::from("de"),
        },
        &state,
        TODAY,
    )
    .unwrap();
    assert_eq!(unknown_language, None);
}
