// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Search and status filtering for the list pages.
//!
//! Read-only projections over the store's collections; the search term
//! is matched case-insensitively against the fields each page displays.

use predial_domain::{
    Contract, Property, PropertyStatus, User, UserRole, WorkOrder, WorkOrderStatus,
};

fn matches(haystack: &str, needle_lower: &str) -> bool {
    needle_lower.is_empty() || haystack.to_lowercase().contains(needle_lower)
}

/// Filters properties by a search term over name/location and an
/// optional status. `None` status means "all".
#[must_use]
pub fn filter_properties<'a>(
    properties: &'a [Property],
    search: &str,
    status: Option<PropertyStatus>,
) -> Vec<&'a Property> {
    let needle: String = search.to_lowercase();
    properties
        .iter()
        .filter(|property| {
            matches(&property.name, &needle) || matches(&property.location, &needle)
        })
        .filter(|property| status.is_none_or(|wanted| property.status == wanted))
        .collect()
}

/// Filters work orders by a search term over title/property name and an
/// optional status.
#[must_use]
pub fn filter_work_orders<'a>(
    work_orders: &'a [WorkOrder],
    search: &str,
    status: Option<WorkOrderStatus>,
) -> Vec<&'a WorkOrder> {
    let needle: String = search.to_lowercase();
    work_orders
        .iter()
        .filter(|order| matches(&order.title, &needle) || matches(&order.property_name, &needle))
        .filter(|order| status.is_none_or(|wanted| order.status == wanted))
        .collect()
}

/// Filters contracts by a search term over company/service.
#[must_use]
pub fn filter_contracts<'a>(contracts: &'a [Contract], search: &str) -> Vec<&'a Contract> {
    let needle: String = search.to_lowercase();
    contracts
        .iter()
        .filter(|contract| {
            matches(&contract.company, &needle) || matches(&contract.service, &needle)
        })
        .collect()
}

/// Filters users by a search term over name/email and an optional role.
#[must_use]
pub fn filter_users<'a>(users: &'a [User], search: &str, role: Option<UserRole>) -> Vec<&'a User> {
    let needle: String = search.to_lowercase();
    users
        .iter()
        .filter(|user| matches(&user.name, &needle) || matches(&user.email, &needle))
        .filter(|user| role.is_none_or(|wanted| user.role == wanted))
        .collect()
}
