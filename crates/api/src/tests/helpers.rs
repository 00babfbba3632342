// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Shared builders for boundary-layer tests.

use crate::validators::{
    DATE_INPUT_FORMAT, user_form_validator, validate_contract_form, validate_property_form,
    validate_work_order_form,
};
use predial::{EntityStore, seed};
use predial_forms::{FieldValues, FormController};
use time::macros::datetime;
use time::{Duration, OffsetDateTime};

/// Fixed clock shared by every test, so synthesized identifiers carry a
/// stable year.
pub fn fixed_now() -> OffsetDateTime {
    datetime!(2024-06-15 12:00 UTC)
}

pub fn test_store() -> EntityStore {
    EntityStore::with_clock(fixed_now)
}

pub fn seeded_test_store() -> EntityStore {
    let mut store = test_store();
    seed(&mut store);
    store
}

fn values(pairs: &[(&str, &str)]) -> FieldValues {
    pairs
        .iter()
        .map(|(name, value)| (String::from(*name), String::from(*value)))
        .collect()
}

/// Dialog defaults for the property form.
pub fn property_form() -> FormController {
    FormController::new(
        values(&[
            ("name", ""),
            ("location", ""),
            ("category", "Administrative HQ"),
            ("built_area", ""),
            ("status", "Active"),
            ("notes", ""),
        ]),
        validate_property_form,
    )
}

/// Dialog defaults for the work order form.
pub fn work_order_form() -> FormController {
    let default_due: String = (fixed_now() + Duration::days(7))
        .date()
        .format(DATE_INPUT_FORMAT)
        .unwrap();
    let mut initial: FieldValues = values(&[
        ("title", ""),
        ("property_id", ""),
        ("category", "Climate Control"),
        ("priority", "Medium"),
        ("assigned_to", ""),
        ("description", ""),
        ("status", "Open"),
    ]);
    initial.insert(String::from("due_date"), default_due);
    FormController::new(initial, validate_work_order_form)
}

/// Dialog defaults for the contract form.
pub fn contract_form() -> FormController {
    FormController::new(
        values(&[
            ("company", ""),
            ("service", ""),
            ("start_date", ""),
            ("end_date", ""),
            ("value", ""),
            ("status", "Active"),
            ("contact", ""),
            ("phone", ""),
            ("notes", ""),
        ]),
        validate_contract_form,
    )
}

/// Dialog defaults for the user form.
pub fn user_form(editing: bool) -> FormController {
    FormController::new(
        values(&[
            ("name", ""),
            ("email", ""),
            ("role", "Technician"),
            ("unit", ""),
            ("status", "Active"),
            ("password", ""),
        ]),
        user_form_validator(editing),
    )
}

/// Applies a batch of field changes, as if the user typed through the
/// dialog.
pub fn fill(form: &mut FormController, pairs: &[(&str, &str)]) {
    for (name, value) in pairs {
        form.change(name, *value);
    }
}
