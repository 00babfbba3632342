// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Flat tabular projections for the document-export collaborator and
//! serialized chart data for the chart-rendering surface.
//!
//! These are straight field selections over the store's collections; no
//! aggregation logic lives here beyond what the core aggregator already
//! computed.

use predial::{ChartBreakdowns, EntityStore, chart_breakdowns};
use thiserror::Error;

/// Failures while rendering a projection.
#[derive(Debug, Error)]
pub enum ProjectionError {
    /// The CSV writer rejected a record.
    #[error("Failed to render CSV projection: {0}")]
    Csv(#[from] csv::Error),
    /// The rendered bytes were not valid UTF-8.
    #[error("Rendered CSV is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
    /// Chart data serialization failed.
    #[error("Failed to serialize chart data: {0}")]
    Json(#[from] serde_json::Error),
}

fn write_csv(
    header: &[&str],
    rows: impl Iterator<Item = Vec<String>>,
) -> Result<String, ProjectionError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(header)?;
    for row in rows {
        writer.write_record(&row)?;
    }
    let bytes: Vec<u8> = writer
        .into_inner()
        .map_err(|err| csv::Error::from(err.into_error()))?;
    Ok(String::from_utf8(bytes)?)
}

/// Renders the properties collection as CSV.
///
/// # Errors
///
/// Returns a `ProjectionError` if CSV rendering fails.
pub fn properties_csv(store: &EntityStore) -> Result<String, ProjectionError> {
    write_csv(
        &[
            "ID",
            "Name",
            "Location",
            "Category",
            "Area (m2)",
            "Status",
            "Last Maintenance",
            "Next Maintenance",
        ],
        store.properties().iter().map(|property| {
            vec![
                property.id.to_string(),
                property.name.clone(),
                property.location.clone(),
                property.category.to_string(),
                format!("{:.0}", property.built_area),
                property.status.to_string(),
                property.last_maintenance.date().to_string(),
                property.next_maintenance.date().to_string(),
            ]
        }),
    )
}

/// Renders the work orders collection as CSV.
///
/// # Errors
///
/// Returns a `ProjectionError` if CSV rendering fails.
pub fn work_orders_csv(store: &EntityStore) -> Result<String, ProjectionError> {
    write_csv(
        &[
            "ID",
            "Property",
            "Title",
            "Status",
            "Priority",
            "Assigned To",
            "Category",
            "Created",
            "Due",
        ],
        store.work_orders().iter().map(|order| {
            vec![
                order.id.clone(),
                order.property_name.clone(),
                order.title.clone(),
                order.status.to_string(),
                order.priority.to_string(),
                order.assigned_to.clone(),
                order.category.clone(),
                order.created_date.date().to_string(),
                order.due_date.date().to_string(),
            ]
        }),
    )
}

/// Renders the contracts collection as CSV.
///
/// # Errors
///
/// Returns a `ProjectionError` if CSV rendering fails.
pub fn contracts_csv(store: &EntityStore) -> Result<String, ProjectionError> {
    write_csv(
        &[
            "ID",
            "Company",
            "Service",
            "Start Date",
            "End Date",
            "Value",
            "Status",
            "Contact",
            "Phone",
        ],
        store.contracts().iter().map(|contract| {
            vec![
                contract.id.clone(),
                contract.company.clone(),
                contract.service.clone(),
                contract.start_date.to_string(),
                contract.end_date.to_string(),
                format!("{:.2}", contract.value),
                contract.status.to_string(),
                contract.contact.clone(),
                contract.phone.clone(),
            ]
        }),
    )
}

/// Renders the users collection as CSV.
///
/// # Errors
///
/// Returns a `ProjectionError` if CSV rendering fails.
pub fn users_csv(store: &EntityStore) -> Result<String, ProjectionError> {
    write_csv(
        &["ID", "Name", "Email", "Role", "Unit", "Status"],
        store.users().iter().map(|user| {
            vec![
                user.id.to_string(),
                user.name.clone(),
                user.email.clone(),
                user.role.to_string(),
                user.unit.clone(),
                user.status.to_string(),
            ]
        }),
    )
}

/// Serializes the chart breakdowns for the chart-rendering surface.
///
/// # Errors
///
/// Returns a `ProjectionError` if serialization fails.
pub fn chart_data_json(store: &EntityStore) -> Result<String, ProjectionError> {
    let breakdowns: ChartBreakdowns = chart_breakdowns(store);
    Ok(serde_json::to_string(&breakdowns)?)
}
