// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::types::Employee;
use time::Date;
use time::macros::format_description;

/// Minimum age an employee may have on their date of birth.
pub const MIN_EMPLOYEE_AGE: i32 = 18;

/// Maximum plausible employee age; older birth dates are treated as
/// data-entry errors.
pub const MAX_EMPLOYEE_AGE: i32 = 100;

/// Parses an ISO 8601 date string (`YYYY-MM-DD`).
///
/// # Errors
///
/// Returns `DomainError::DateParseError` if the string is not a valid
/// calendar date in ISO format.
pub fn parse_date(value: &str) -> Result<Date, DomainError> {
    let format = format_description!("[year]-[month]-[day]");
    Date::parse(value, format).map_err(|err| DomainError::DateParseError {
        date_string: value.to_string(),
        error: err.to_string(),
    })
}

/// Checks that a required field has a non-empty value after trimming.
#[must_use]
pub fn is_present(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Checks that a date field is not in the future.
///
/// An empty value passes; presence is a separate rule. A non-empty value
/// that fails to parse is rejected. A date equal to `today` is accepted.
#[must_use]
pub fn is_within_today(value: &str, today: Date) -> bool {
    if value.is_empty() {
        return true;
    }
    parse_date(value).is_ok_and(|date| date <= today)
}

/// Checks that a date of birth is plausible for an employee.
///
/// An empty value passes; presence is a separate rule. The date must not
/// be in the future, and the age it yields on `today` must be between
/// [`MIN_EMPLOYEE_AGE`] and [`MAX_EMPLOYEE_AGE`] inclusive.
///
/// # Arguments
///
/// * `value` - The date of birth as an ISO 8601 date string
/// * `today` - The reference date for the age computation
#[must_use]
pub fn is_valid_birth_date(value: &str, today: Date) -> bool {
    if value.is_empty() {
        return true;
    }
    let Ok(birth) = parse_date(value) else {
        return false;
    };
    if birth > today {
        return false;
    }
    (MIN_EMPLOYEE_AGE..=MAX_EMPLOYEE_AGE).contains(&age_on(birth, today))
}

/// Computes a person's age in whole years on a reference date.
///
/// The year difference is decremented by one if the reference date falls
/// before the birthday within the year, so the result is exact on the
/// birthday itself.
#[must_use]
pub fn age_on(birth: Date, today: Date) -> i32 {
    let mut age: i32 = today.year() - birth.year();
    let before_birthday: bool =
        (u8::from(today.month()), today.day()) < (u8::from(birth.month()), birth.day());
    if before_birthday {
        age -= 1;
    }
    age
}

/// Checks that a phone number matches the national mobile format:
/// exactly 11 digits with the leading `05` prefix.
///
/// An empty value passes; presence is a separate rule.
#[must_use]
pub fn is_valid_phone(value: &str) -> bool {
    if value.is_empty() {
        return true;
    }
    value.len() == 11 && value.starts_with("05") && value.bytes().all(|b| b.is_ascii_digit())
}

/// Checks that an email address has the `local@domain.tld` shape:
/// no whitespace, a single `@` with a non-empty local part, and a dot
/// in the interior of the domain.
///
/// An empty value passes; presence is a separate rule.
#[must_use]
pub fn is_valid_email(value: &str) -> bool {
    if value.is_empty() {
        return true;
    }
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(index, c)| c == '.' && index > 0 && index < domain.len() - 1)
}

/// Checks that an email address is not already used by any employee in
/// the collection.
///
/// This function is pure, deterministic, and has no side effects.
///
/// # Arguments
///
/// * `email` - The email address to check
/// * `employees` - The collection of existing employee records
#[must_use]
pub fn is_unique_email(email: &str, employees: &[Employee]) -> bool {
    if email.is_empty() {
        return true;
    }
    !employees.iter().any(|employee| employee.email == email)
}
