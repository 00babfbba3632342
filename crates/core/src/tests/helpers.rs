// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Shared builders for store and aggregation tests.

use crate::store::{EntityStore, NewContract, NewProperty, NewUser, NewWorkOrder};
use predial_domain::{
    ContractStatus, PropertyCategory, PropertyId, PropertyStatus, UserRole, UserStatus,
    WorkOrderPriority, WorkOrderStatus,
};
use time::macros::datetime;
use time::{Duration, OffsetDateTime};

/// Fixed clock so identifier years and default timestamps are stable.
pub fn fixed_now() -> OffsetDateTime {
    datetime!(2024-06-15 12:00 UTC)
}

/// An empty store pinned to [`fixed_now`].
pub fn test_store() -> EntityStore {
    EntityStore::with_clock(fixed_now)
}

pub fn new_property(name: &str) -> NewProperty {
    NewProperty {
        name: String::from(name),
        location: String::from("Brasília, DF"),
        category: PropertyCategory::AdministrativeHq,
        built_area: 1000.0,
        status: PropertyStatus::Active,
        last_maintenance: None,
        next_maintenance: None,
        notes: None,
    }
}

pub fn new_work_order(property_id: PropertyId, title: &str) -> NewWorkOrder {
    NewWorkOrder {
        property_id,
        title: String::from(title),
        description: String::from("Routine maintenance work"),
        status: None,
        priority: WorkOrderPriority::Medium,
        assigned_to: String::from("ABC Climate Services"),
        category: String::from("Climate Control"),
        due_date: fixed_now() + Duration::days(7),
    }
}

pub fn new_contract(company: &str) -> NewContract {
    let start = fixed_now().date();
    NewContract {
        company: String::from(company),
        service: String::from("General Maintenance"),
        start_date: start,
        end_date: start + Duration::days(365),
        value: 50_000.0,
        status: ContractStatus::Active,
        contact: String::from("Carlos Silva"),
        phone: String::from("(61) 3333-4444"),
        notes: None,
    }
}

pub fn new_user(name: &str, email: &str) -> NewUser {
    NewUser {
        name: String::from(name),
        email: String::from(email),
        role: UserRole::Technician,
        unit: String::from("Regional Superintendency DF"),
        status: UserStatus::Active,
        password: None,
    }
}

/// A store with one property in each status and one work order in each
/// status, for aggregation tests.
pub fn mixed_store() -> EntityStore {
    let mut store = test_store();
    let active = store.add_property(new_property("Active Building"));
    let mut maintenance = new_property("Maintenance Building");
    maintenance.status = PropertyStatus::UnderMaintenance;
    store.add_property(maintenance);
    let mut inactive = new_property("Inactive Building");
    inactive.status = PropertyStatus::Inactive;
    store.add_property(inactive);

    for status in [
        WorkOrderStatus::Open,
        WorkOrderStatus::InProgress,
        WorkOrderStatus::Completed,
    ] {
        let mut order = new_work_order(active.id, "Routine Work");
        order.status = Some(status);
        store.add_work_order(order);
    }
    store
}
