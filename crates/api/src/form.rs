// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use roster_domain::{
    Employee, Language, MIN_EMPLOYEE_AGE, age_on, is_present, is_unique_email,
    is_valid_birth_date, is_valid_email, is_valid_phone, is_within_today, parse_date,
};
use std::collections::BTreeMap;
use time::Date;

/// Whether the form is creating a new record or editing an existing one.
///
/// Edit mode changes exactly one rule: the email uniqueness check is
/// skipped entirely, so an unchanged email does not collide with the
/// record itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    /// Adding a new employee; the draft has no id.
    Create,
    /// Editing an existing employee.
    Edit,
}

/// The eight fields of the employee form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum FormField {
    /// First name.
    FirstName,
    /// Last name.
    LastName,
    /// Date of employment.
    DateOfEmployment,
    /// Date of birth.
    DateOfBirth,
    /// Phone number.
    Phone,
    /// Email address.
    Email,
    /// Department.
    Department,
    /// Position.
    Position,
}

impl FormField {
    /// All form fields, in form order.
    pub const ALL: [Self; 8] = [
        Self::FirstName,
        Self::LastName,
        Self::DateOfEmployment,
        Self::DateOfBirth,
        Self::Phone,
        Self::Email,
        Self::Department,
        Self::Position,
    ];

    /// The field name as used in message keys and payloads.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::DateOfEmployment => "dateOfEmployment",
            Self::DateOfBirth => "dateOfBirth",
            Self::Phone => "phone",
            Self::Email => "email",
            Self::Department => "department",
            Self::Position => "position",
        }
    }
}

/// A single field-level validation failure.
///
/// A field carries at most one error at a time; the first failing rule
/// wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    /// The field is empty after trimming.
    Required,
    /// The date lies in the future.
    FutureDate,
    /// The birth date yields an age under the minimum.
    TooYoung,
    /// The birth date yields an implausibly high age, or is not a date
    /// at all.
    TooOld,
    /// The phone number does not match the national format.
    InvalidPhone,
    /// The email address is malformed.
    InvalidEmail,
    /// The email address already belongs to another employee.
    DuplicateEmail,
}

impl FieldError {
    /// The i18n message key for this error on the given field.
    #[must_use]
    pub fn message_key(self, field: FormField) -> String {
        match self {
            Self::Required => format!("error.required.{}", field.name()),
            Self::FutureDate => format!("error.future.{}", field.name()),
            Self::TooYoung => String::from("error.tooYoung"),
            Self::TooOld => String::from("error.tooOld"),
            Self::InvalidPhone => String::from("error.invalid.phone"),
            Self::InvalidEmail => String::from("error.invalid.email"),
            Self::DuplicateEmail => String::from("error.duplicate.email"),
        }
    }
}

/// A form draft as entered by the user: raw strings, not yet domain
/// values.
///
/// Drafts are transient and owned by a single in-progress form; they are
/// discarded on submit or cancel and never enter the application state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeFormDraft {
    /// The id of the record being edited; `None` when creating.
    pub id: Option<u32>,
    /// First name input.
    pub first_name: String,
    /// Last name input.
    pub last_name: String,
    /// Date of employment input (ISO 8601 date string).
    pub date_of_employment: String,
    /// Date of birth input (ISO 8601 date string).
    pub date_of_birth: String,
    /// Phone number input.
    pub phone: String,
    /// Email address input.
    pub email: String,
    /// Selected department, as its display string.
    pub department: String,
    /// Selected position, as its display string.
    pub position: String,
}

/// The result of a whole-form validation pass.
///
/// Overall validity is the AND of all field checks; an empty error map
/// means the form may be submitted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValidation {
    errors: BTreeMap<FormField, FieldError>,
}

impl FormValidation {
    /// Whether every field passed.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// The active error for a field, if any.
    #[must_use]
    pub fn error(&self, field: FormField) -> Option<FieldError> {
        self.errors.get(&field).copied()
    }

    /// Optimistically clears the error for a field the user just edited.
    ///
    /// This gives responsive feedback before resubmission; it is not a
    /// validation pass, and the next [`validate_form`] call recomputes
    /// the full map.
    pub fn clear(&mut self, field: FormField) {
        self.errors.remove(&field);
    }

    /// Iterates over the active field errors.
    pub fn errors(&self) -> impl Iterator<Item = (FormField, FieldError)> + '_ {
        self.errors.iter().map(|(field, error)| (*field, *error))
    }

    /// Localized error messages keyed by field.
    #[must_use]
    pub fn messages(&self, language: Language) -> BTreeMap<FormField, String> {
        self.errors
            .iter()
            .map(|(field, error)| {
                (
                    *field,
                    roster_i18n::translate(language, &error.message_key(*field)),
                )
            })
            .collect()
    }

    fn insert(&mut self, field: FormField, error: FieldError) {
        self.errors.insert(field, error);
    }
}

/// Validates the whole form.
///
/// Invoked on submit; the full error map is recomputed every time, with
/// no incremental or partial passes. All eight fields are required;
/// per-field rules run in order and the first failure wins.
///
/// # Arguments
///
/// * `draft` - The form draft to validate
/// * `mode` - Create or edit; edit skips the email uniqueness check
/// * `employees` - The current employee collection, for uniqueness
/// * `today` - The reference date for future-date and age rules
#[must_use]
pub fn validate_form(
    draft: &EmployeeFormDraft,
    mode: FormMode,
    employees: &[Employee],
    today: Date,
) -> FormValidation {
    let mut validation: FormValidation = FormValidation::default();

    if !is_present(&draft.first_name) {
        validation.insert(FormField::FirstName, FieldError::Required);
    }

    if !is_present(&draft.last_name) {
        validation.insert(FormField::LastName, FieldError::Required);
    }

    if !is_present(&draft.date_of_employment) {
        validation.insert(FormField::DateOfEmployment, FieldError::Required);
    } else if !is_within_today(&draft.date_of_employment, today) {
        validation.insert(FormField::DateOfEmployment, FieldError::FutureDate);
    }

    if !is_present(&draft.date_of_birth) {
        validation.insert(FormField::DateOfBirth, FieldError::Required);
    } else if !is_valid_birth_date(&draft.date_of_birth, today) {
        validation.insert(
            FormField::DateOfBirth,
            birth_date_error(&draft.date_of_birth, today),
        );
    }

    if !is_present(&draft.phone) {
        validation.insert(FormField::Phone, FieldError::Required);
    } else if !is_valid_phone(&draft.phone) {
        validation.insert(FormField::Phone, FieldError::InvalidPhone);
    }

    if !is_present(&draft.email) {
        validation.insert(FormField::Email, FieldError::Required);
    } else if !is_valid_email(&draft.email) {
        validation.insert(FormField::Email, FieldError::InvalidEmail);
    } else if mode == FormMode::Create && !is_unique_email(&draft.email, employees) {
        validation.insert(FormField::Email, FieldError::DuplicateEmail);
    }

    if !is_present(&draft.department) {
        validation.insert(FormField::Department, FieldError::Required);
    }

    if !is_present(&draft.position) {
        validation.insert(FormField::Position, FieldError::Required);
    }

    validation
}

/// Distinguishes why a non-empty birth date failed.
///
/// The future-date check takes priority over the age checks, so exactly
/// one of the three errors fires. A value that does not parse as a date
/// at all reports [`FieldError::TooOld`], whose message doubles as the
/// generic "enter a valid date of birth" prompt.
fn birth_date_error(value: &str, today: Date) -> FieldError {
    let Ok(birth) = parse_date(value) else {
        return FieldError::TooOld;
    };
    if birth > today {
        return FieldError::FutureDate;
    }
    if age_on(birth, today) < MIN_EMPLOYEE_AGE {
        FieldError::TooYoung
    } else {
        FieldError::TooOld
    }
}
