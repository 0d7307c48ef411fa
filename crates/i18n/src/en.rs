// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// English UI strings.
pub(super) const TABLE: &[(&str, &str)] = &[
    // Navigation
    ("nav.employeeList", "Employee List"),
    ("nav.addEmployee", "Add Employee"),
    // Page titles
    ("page.employeeList", "Employee List"),
    ("page.addEmployee", "Add New Employee"),
    // Table headers
    ("table.firstName", "First Name"),
    ("table.lastName", "Last Name"),
    ("table.dateOfEmployment", "Date of Employment"),
    ("table.dateOfBirth", "Date of Birth"),
    ("table.phone", "Phone"),
    ("table.email", "Email"),
    ("table.department", "Department"),
    ("table.position", "Position"),
    ("table.actions", "Actions"),
    // Employee card labels
    ("card.department", "Department"),
    ("card.position", "Position"),
    ("card.employmentDate", "Employment Date"),
    ("card.email", "Email"),
    ("card.phone", "Phone"),
    // Form labels
    ("form.firstName", "First Name"),
    ("form.lastName", "Last Name"),
    ("form.dateOfEmployment", "Date of Employment"),
    ("form.dateOfBirth", "Date of Birth"),
    ("form.phone", "Phone Number"),
    ("form.phoneFormat", "+90XXXXXXXXXX"),
    ("form.email", "Email Address"),
    ("form.emailFormat", "example@company.com"),
    ("form.department", "Department"),
    ("form.selectDepartment", "Select department"),
    ("form.position", "Position"),
    ("form.selectPosition", "Select position"),
    // Form validation errors
    ("error.required.firstName", "First name is required"),
    ("error.required.lastName", "Last name is required"),
    ("error.required.dateOfEmployment", "Date of employment is required"),
    (
        "error.future.dateOfEmployment",
        "Date of employment cannot be in the future",
    ),
    ("error.required.dateOfBirth", "Date of birth is required"),
    ("error.future.dateOfBirth", "Date of birth cannot be in the future"),
    ("error.tooYoung", "Employee must be at least 18 years old"),
    ("error.tooOld", "Please enter a valid date of birth"),
    ("error.required.phone", "Phone number is required"),
    (
        "error.invalid.phone",
        "Please enter a valid phone number (05XXXXXXXXX)",
    ),
    ("error.required.email", "Email is required"),
    ("error.invalid.email", "Please enter a valid email address"),
    ("error.duplicate.email", "This email address is already registered"),
    ("error.required.department", "Department is required"),
    ("error.required.position", "Position is required"),
    // Buttons
    ("button.add", "Add Employee"),
    ("button.update", "Update Employee"),
    ("button.cancel", "Cancel"),
    ("button.delete", "Delete"),
    ("button.edit", "Edit"),
    ("button.tableView", "Table View"),
    ("button.listView", "List View"),
    ("button.proceed", "Proceed"),
    // Confirmations
    (
        "confirm.add",
        "Selected Employee record of {{firstName}} {{lastName}} will be added.",
    ),
    (
        "confirm.update",
        "Selected Employee record of {{firstName}} {{lastName}} will be updated.",
    ),
    (
        "confirm.delete",
        "Selected Employee record of {{firstName}} {{lastName}} will be deleted.",
    ),
    ("confirm.title", "Are you sure?"),
    // Empty states
    ("empty.title", "No employees found"),
    ("empty.message", "There are currently no employees in the database."),
    // Search
    ("search.placeholder", "Search employees..."),
    // Select input
    ("select.placeholder", "Select an option"),
    // Modal
    ("modal.editEmployee", "Edit Employee"),
];
