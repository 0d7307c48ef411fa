// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::validation::parse_date;

/// Renders a raw phone digit string for display.
///
/// An 11-digit number with the national `05` prefix is grouped as
/// `+(90) 5XX XXX XX XX`. Anything else is returned unchanged; display
/// formatting never rejects a value.
#[must_use]
pub fn format_phone_number(phone: &str) -> String {
    if phone.len() == 11 && phone.is_ascii() && phone.starts_with("05") {
        format!(
            "+(90) {} {} {} {}",
            &phone[1..4],
            &phone[4..7],
            &phone[7..9],
            &phone[9..11]
        )
    } else {
        phone.to_string()
    }
}

/// Renders an ISO 8601 date string as `DD/MM/YYYY` for display.
///
/// Unparseable input renders as an empty string rather than an error;
/// display formatting never surfaces failures.
#[must_use]
pub fn format_date(value: &str) -> String {
    parse_date(value).map_or_else(
        |_| String::new(),
        |date| {
            format!(
                "{:02}/{:02}/{}",
                date.day(),
                u8::from(date.month()),
                date.year()
            )
        },
    )
}
