// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Per-entity form validation functions.
//!
//! Each function follows the form controller's validator contract: given
//! the full candidate value set, return an error entry only for fields
//! currently invalid. The store trusts these checks and never validates
//! field contents itself.

use predial_domain::{
    MIN_PASSWORD_LENGTH, validate_contract_dates, validate_email, validate_positive_amount,
};
use predial_forms::{FieldErrors, FieldValues};
use time::Date;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

/// Date shape produced by the console's date inputs.
pub const DATE_INPUT_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day]");

fn field<'a>(values: &'a FieldValues, name: &str) -> &'a str {
    values.get(name).map_or("", String::as_str)
}

fn require(errors: &mut FieldErrors, values: &FieldValues, name: &str, message: &str) -> bool {
    if field(values, name).is_empty() {
        errors.insert(String::from(name), String::from(message));
        return false;
    }
    true
}

fn parse_date(values: &FieldValues, name: &str) -> Option<Date> {
    Date::parse(field(values, name), DATE_INPUT_FORMAT).ok()
}

/// Validates the property form: name, location, and a positive numeric
/// built area.
#[must_use]
pub fn validate_property_form(values: &FieldValues) -> FieldErrors {
    let mut errors = FieldErrors::new();
    require(&mut errors, values, "name", "Property name is required");
    require(&mut errors, values, "location", "Location is required");
    if require(&mut errors, values, "built_area", "Built area is required") {
        let valid: bool = field(values, "built_area")
            .parse::<f64>()
            .is_ok_and(|area| validate_positive_amount("built_area", area).is_ok());
        if !valid {
            errors.insert(
                String::from("built_area"),
                String::from("Built area must be a positive number"),
            );
        }
    }
    errors
}

/// Validates the work order form: title, property selection, assignee,
/// description, and a well-formed due date.
#[must_use]
pub fn validate_work_order_form(values: &FieldValues) -> FieldErrors {
    let mut errors = FieldErrors::new();
    require(&mut errors, values, "title", "Title is required");
    if require(&mut errors, values, "property_id", "Property is required")
        && field(values, "property_id").parse::<u32>().is_err()
    {
        errors.insert(
            String::from("property_id"),
            String::from("Property selection is not valid"),
        );
    }
    require(&mut errors, values, "assigned_to", "Assignee is required");
    require(&mut errors, values, "description", "Description is required");
    if require(&mut errors, values, "due_date", "Due date is required")
        && parse_date(values, "due_date").is_none()
    {
        errors.insert(
            String::from("due_date"),
            String::from("Due date must be a valid date"),
        );
    }
    errors
}

/// Validates the contract form: company, service, an ordered date range,
/// a positive monetary value, and contact details.
#[must_use]
pub fn validate_contract_form(values: &FieldValues) -> FieldErrors {
    let mut errors = FieldErrors::new();
    require(&mut errors, values, "company", "Company name is required");
    require(&mut errors, values, "service", "Service type is required");

    let start_ok: bool = require(&mut errors, values, "start_date", "Start date is required");
    let end_ok: bool = require(&mut errors, values, "end_date", "End date is required");
    let start: Option<Date> = start_ok.then(|| parse_date(values, "start_date")).flatten();
    let end: Option<Date> = end_ok.then(|| parse_date(values, "end_date")).flatten();
    if start_ok && start.is_none() {
        errors.insert(
            String::from("start_date"),
            String::from("Start date must be a valid date"),
        );
    }
    if end_ok && end.is_none() {
        errors.insert(
            String::from("end_date"),
            String::from("End date must be a valid date"),
        );
    }
    if let (Some(start), Some(end)) = (start, end)
        && validate_contract_dates(start, end).is_err()
    {
        errors.insert(
            String::from("end_date"),
            String::from("End date must not precede the start date"),
        );
    }

    if require(&mut errors, values, "value", "Contract value is required") {
        let valid: bool = field(values, "value")
            .parse::<f64>()
            .is_ok_and(|value| validate_positive_amount("value", value).is_ok());
        if !valid {
            errors.insert(
                String::from("value"),
                String::from("Value must be a positive number"),
            );
        }
    }
    require(&mut errors, values, "contact", "Contact name is required");
    require(&mut errors, values, "phone", "Phone is required");
    errors
}

/// Builds the user form validator.
///
/// The password rules apply only when creating a user; editing an
/// existing user leaves the password fields out of scope entirely.
///
/// # Arguments
///
/// * `editing` - Whether the form is editing an existing user
#[must_use]
pub fn user_form_validator(editing: bool) -> impl Fn(&FieldValues) -> FieldErrors + Send + Sync {
    move |values: &FieldValues| {
        let mut errors = FieldErrors::new();
        require(&mut errors, values, "name", "Name is required");
        if require(&mut errors, values, "email", "Email is required")
            && validate_email(field(values, "email")).is_err()
        {
            errors.insert(String::from("email"), String::from("Email is not valid"));
        }
        require(&mut errors, values, "unit", "Unit/organization is required");
        if !editing {
            let password: &str = field(values, "password");
            if password.is_empty() {
                errors.insert(String::from("password"), String::from("Password is required"));
            } else if password.chars().count() < MIN_PASSWORD_LENGTH {
                errors.insert(
                    String::from("password"),
                    format!("Password must be at least {MIN_PASSWORD_LENGTH} characters long"),
                );
            }
        }
        errors
    }
}
