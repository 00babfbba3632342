// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Save and delete handlers for the CRUD dialogs.
//!
//! Each save handler drives a form controller through its submit
//! lifecycle; on success the validated values are parsed into store
//! inputs, the store mutation runs, and a notification is enqueued. The
//! business-failure path is caught here and reported as an
//! Error-severity notification, matching the contract the form
//! controller expects of its callers.

use crate::error::{ApiError, translate_store_error};
use crate::validators::DATE_INPUT_FORMAT;
use predial::{
    ContractPatch, DeleteOutcome, EntityStore, NewContract, NewProperty, NewUser, NewWorkOrder,
    PropertyPatch, UserPatch, WorkOrderPatch,
};
use predial_domain::{PropertyId, UserId};
use predial_forms::{FieldValues, FormController, SubmitOutcome};
use predial_notify::NotificationQueue;
use std::future::ready;
use std::str::FromStr;
use time::{Date, OffsetDateTime};

fn field(values: &FieldValues, name: &str) -> String {
    values.get(name).cloned().unwrap_or_default()
}

fn optional_field(values: &FieldValues, name: &str) -> Option<String> {
    values.get(name).filter(|value| !value.is_empty()).cloned()
}

fn parse_field<T>(values: &FieldValues, name: &'static str) -> Result<T, ApiError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    field(values, name).parse::<T>().map_err(|err| ApiError::InvalidInput {
        field: String::from(name),
        message: err.to_string(),
    })
}

fn parse_date_field(values: &FieldValues, name: &'static str) -> Result<Date, ApiError> {
    Date::parse(&field(values, name), DATE_INPUT_FORMAT).map_err(|err| ApiError::InvalidInput {
        field: String::from(name),
        message: err.to_string(),
    })
}

fn parse_timestamp_field(
    values: &FieldValues,
    name: &'static str,
) -> Result<OffsetDateTime, ApiError> {
    Ok(parse_date_field(values, name)?.midnight().assume_utc())
}

fn apply_property_save(
    store: &mut EntityStore,
    editing: Option<PropertyId>,
    values: &FieldValues,
) -> Result<(), ApiError> {
    let built_area: f64 = parse_field(values, "built_area")?;
    match editing {
        Some(id) => {
            store
                .update_property(PropertyPatch {
                    id,
                    name: Some(field(values, "name")),
                    location: Some(field(values, "location")),
                    category: Some(parse_field(values, "category")?),
                    built_area: Some(built_area),
                    status: Some(parse_field(values, "status")?),
                    last_maintenance: None,
                    next_maintenance: None,
                    notes: optional_field(values, "notes"),
                })
                .map_err(translate_store_error)?;
        }
        None => {
            store.add_property(NewProperty {
                name: field(values, "name"),
                location: field(values, "location"),
                category: parse_field(values, "category")?,
                built_area,
                status: parse_field(values, "status")?,
                last_maintenance: None,
                next_maintenance: None,
                notes: optional_field(values, "notes"),
            });
        }
    }
    Ok(())
}

/// Submits the property form, saving a new or existing property.
///
/// Validation failures keep the dialog open with inline errors and no
/// notification. A store failure is reported as an Error notification
/// and never surfaces as a field error.
pub async fn save_property(
    store: &mut EntityStore,
    queue: &mut NotificationQueue,
    form: &mut FormController,
    editing: Option<PropertyId>,
) -> SubmitOutcome {
    let now: OffsetDateTime = store.now();
    let updating: bool = editing.is_some();
    form.submit(|values| {
        match apply_property_save(store, editing, &values) {
            Ok(()) => {
                let message: &str = if updating {
                    "Property updated successfully"
                } else {
                    "Property added successfully"
                };
                queue.success(message, now);
            }
            Err(err) => {
                tracing::warn!("Failed to save property: {err}");
                queue.error("Property could not be saved", now);
            }
        }
        ready(Ok::<(), ApiError>(()))
    })
    .await
}

/// Deletes a property, reporting the outcome as a notification.
///
/// Deletion is idempotent; an identifier that is already absent produces
/// a Warning instead of a Success.
pub fn delete_property(
    store: &mut EntityStore,
    queue: &mut NotificationQueue,
    id: PropertyId,
) -> DeleteOutcome {
    let now: OffsetDateTime = store.now();
    let outcome: DeleteOutcome = store.delete_property(id);
    match outcome {
        DeleteOutcome::Deleted => {
            queue.success("Property deleted successfully", now);
        }
        DeleteOutcome::NotFound => {
            queue.warning("Property was already removed", now);
        }
    }
    outcome
}

fn apply_work_order_save(
    store: &mut EntityStore,
    editing: Option<&str>,
    values: &FieldValues,
) -> Result<(), ApiError> {
    let due_date: OffsetDateTime = parse_timestamp_field(values, "due_date")?;
    match editing {
        Some(id) => {
            store
                .update_work_order(WorkOrderPatch {
                    id: String::from(id),
                    property_id: Some(parse_field(values, "property_id")?),
                    // Left unset so the store re-resolves the cached
                    // property name against the current collection.
                    property_name: None,
                    title: Some(field(values, "title")),
                    description: Some(field(values, "description")),
                    status: Some(parse_field(values, "status")?),
                    priority: Some(parse_field(values, "priority")?),
                    assigned_to: Some(field(values, "assigned_to")),
                    category: Some(field(values, "category")),
                    due_date: Some(due_date),
                })
                .map_err(translate_store_error)?;
        }
        None => {
            store.add_work_order(NewWorkOrder {
                property_id: parse_field(values, "property_id")?,
                title: field(values, "title"),
                description: field(values, "description"),
                status: Some(parse_field(values, "status")?),
                priority: parse_field(values, "priority")?,
                assigned_to: field(values, "assigned_to"),
                category: field(values, "category"),
                due_date,
            });
        }
    }
    Ok(())
}

/// Submits the work order form, saving a new or existing work order.
pub async fn save_work_order(
    store: &mut EntityStore,
    queue: &mut NotificationQueue,
    form: &mut FormController,
    editing: Option<&str>,
) -> SubmitOutcome {
    let now: OffsetDateTime = store.now();
    let updating: bool = editing.is_some();
    form.submit(|values| {
        match apply_work_order_save(store, editing, &values) {
            Ok(()) => {
                let message: &str = if updating {
                    "Work order updated successfully"
                } else {
                    "Work order created successfully"
                };
                queue.success(message, now);
            }
            Err(err) => {
                tracing::warn!("Failed to save work order: {err}");
                queue.error("Work order could not be saved", now);
            }
        }
        ready(Ok::<(), ApiError>(()))
    })
    .await
}

/// Deletes a work order, reporting the outcome as a notification.
pub fn delete_work_order(
    store: &mut EntityStore,
    queue: &mut NotificationQueue,
    id: &str,
) -> DeleteOutcome {
    let now: OffsetDateTime = store.now();
    let outcome: DeleteOutcome = store.delete_work_order(id);
    match outcome {
        DeleteOutcome::Deleted => {
            queue.success("Work order deleted successfully", now);
        }
        DeleteOutcome::NotFound => {
            queue.warning("Work order was already removed", now);
        }
    }
    outcome
}

fn apply_contract_save(
    store: &mut EntityStore,
    editing: Option<&str>,
    values: &FieldValues,
) -> Result<(), ApiError> {
    let start_date: Date = parse_date_field(values, "start_date")?;
    let end_date: Date = parse_date_field(values, "end_date")?;
    let value: f64 = parse_field(values, "value")?;
    match editing {
        Some(id) => {
            store
                .update_contract(ContractPatch {
                    id: String::from(id),
                    company: Some(field(values, "company")),
                    service: Some(field(values, "service")),
                    start_date: Some(start_date),
                    end_date: Some(end_date),
                    value: Some(value),
                    status: Some(parse_field(values, "status")?),
                    contact: Some(field(values, "contact")),
                    phone: Some(field(values, "phone")),
                    notes: optional_field(values, "notes"),
                })
                .map_err(translate_store_error)?;
        }
        None => {
            store.add_contract(NewContract {
                company: field(values, "company"),
                service: field(values, "service"),
                start_date,
                end_date,
                value,
                status: parse_field(values, "status")?,
                contact: field(values, "contact"),
                phone: field(values, "phone"),
                notes: optional_field(values, "notes"),
            });
        }
    }
    Ok(())
}

/// Submits the contract form, saving a new or existing contract.
pub async fn save_contract(
    store: &mut EntityStore,
    queue: &mut NotificationQueue,
    form: &mut FormController,
    editing: Option<&str>,
) -> SubmitOutcome {
    let now: OffsetDateTime = store.now();
    let updating: bool = editing.is_some();
    form.submit(|values| {
        match apply_contract_save(store, editing, &values) {
            Ok(()) => {
                let message: &str = if updating {
                    "Contract updated successfully"
                } else {
                    "Contract added successfully"
                };
                queue.success(message, now);
            }
            Err(err) => {
                tracing::warn!("Failed to save contract: {err}");
                queue.error("Contract could not be saved", now);
            }
        }
        ready(Ok::<(), ApiError>(()))
    })
    .await
}

/// Deletes a contract, reporting the outcome as a notification.
pub fn delete_contract(
    store: &mut EntityStore,
    queue: &mut NotificationQueue,
    id: &str,
) -> DeleteOutcome {
    let now: OffsetDateTime = store.now();
    let outcome: DeleteOutcome = store.delete_contract(id);
    match outcome {
        DeleteOutcome::Deleted => {
            queue.success("Contract deleted successfully", now);
        }
        DeleteOutcome::NotFound => {
            queue.warning("Contract was already removed", now);
        }
    }
    outcome
}

fn apply_user_save(
    store: &mut EntityStore,
    editing: Option<UserId>,
    values: &FieldValues,
) -> Result<(), ApiError> {
    match editing {
        Some(id) => {
            store
                .update_user(UserPatch {
                    id,
                    name: Some(field(values, "name")),
                    email: Some(field(values, "email")),
                    role: Some(parse_field(values, "role")?),
                    unit: Some(field(values, "unit")),
                    status: Some(parse_field(values, "status")?),
                    password: optional_field(values, "password"),
                })
                .map_err(translate_store_error)?;
        }
        None => {
            store.add_user(NewUser {
                name: field(values, "name"),
                email: field(values, "email"),
                role: parse_field(values, "role")?,
                unit: field(values, "unit"),
                status: parse_field(values, "status")?,
                password: optional_field(values, "password"),
            });
        }
    }
    Ok(())
}

/// Submits the user form, saving a new or existing user.
///
/// The password travels with the form payload but the store discards it.
pub async fn save_user(
    store: &mut EntityStore,
    queue: &mut NotificationQueue,
    form: &mut FormController,
    editing: Option<UserId>,
) -> SubmitOutcome {
    let now: OffsetDateTime = store.now();
    let updating: bool = editing.is_some();
    form.submit(|values| {
        match apply_user_save(store, editing, &values) {
            Ok(()) => {
                let message: &str = if updating {
                    "User updated successfully"
                } else {
                    "User added successfully"
                };
                queue.success(message, now);
            }
            Err(err) => {
                tracing::warn!("Failed to save user: {err}");
                queue.error("User could not be saved", now);
            }
        }
        ready(Ok::<(), ApiError>(()))
    })
    .await
}

/// Deletes a user, reporting the outcome as a notification.
pub fn delete_user(
    store: &mut EntityStore,
    queue: &mut NotificationQueue,
    id: UserId,
) -> DeleteOutcome {
    let now: OffsetDateTime = store.now();
    let outcome: DeleteOutcome = store.delete_user(id);
    match outcome {
        DeleteOutcome::Deleted => {
            queue.success("User deleted successfully", now);
        }
        DeleteOutcome::NotFound => {
            queue.warning("User was already removed", now);
        }
    }
    outcome
}
