// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Seed records supplied at process start.
//!
//! The fixture dates are relative to the store's clock so the seeded
//! console always shows plausible recent activity.

use crate::store::{EntityStore, NewContract, NewProperty, NewUser, NewWorkOrder};
use predial_domain::{
    ContractStatus, PropertyCategory, PropertyStatus, UserRole, UserStatus, WorkOrderPriority,
    WorkOrderStatus,
};
use time::{Duration, OffsetDateTime};

/// Creates a store pre-populated with the fixture records.
#[must_use]
pub fn seeded_store() -> EntityStore {
    let mut store = EntityStore::new();
    seed(&mut store);
    store
}

/// Populates a store with the fixture records through its regular add
/// operations, so identifier counters line up with the seeded contents.
pub fn seed(store: &mut EntityStore) {
    let now: OffsetDateTime = store.now();

    let hq = store.add_property(NewProperty {
        name: String::from("Regional Superintendency HQ"),
        location: String::from("Brasília, DF"),
        category: PropertyCategory::AdministrativeHq,
        built_area: 2500.0,
        status: PropertyStatus::Active,
        last_maintenance: Some(now - Duration::days(15)),
        next_maintenance: Some(now + Duration::days(30)),
        notes: None,
    });
    let highway_post = store.add_property(NewProperty {
        name: String::from("Highway Post BR-040"),
        location: String::from("Luziânia, GO"),
        category: PropertyCategory::OperationalPost,
        built_area: 800.0,
        status: PropertyStatus::Active,
        last_maintenance: Some(now - Duration::days(5)),
        next_maintenance: Some(now + Duration::days(60)),
        notes: None,
    });
    store.add_property(NewProperty {
        name: String::from("Taguatinga Operational Base"),
        location: String::from("Taguatinga, DF"),
        category: PropertyCategory::OperationalBase,
        built_area: 1200.0,
        status: PropertyStatus::UnderMaintenance,
        last_maintenance: Some(now - Duration::days(2)),
        next_maintenance: Some(now + Duration::days(90)),
        notes: None,
    });

    store.add_work_order(NewWorkOrder {
        property_id: hq.id,
        title: String::from("Air Conditioning System Maintenance"),
        description: String::from(
            "Filter replacement and general cleaning of the climate control system",
        ),
        status: Some(WorkOrderStatus::InProgress),
        priority: WorkOrderPriority::High,
        assigned_to: String::from("ABC Climate Services"),
        category: String::from("Climate Control"),
        due_date: now + Duration::days(2),
    });
    store.add_work_order(NewWorkOrder {
        property_id: highway_post.id,
        title: String::from("Electrical System Repair"),
        description: String::from("Circuit breaker replacement and wiring inspection"),
        status: Some(WorkOrderStatus::Open),
        priority: WorkOrderPriority::Medium,
        assigned_to: String::from("Eletro Services Ltd"),
        category: String::from("Electrical"),
        due_date: now + Duration::days(7),
    });
    store.add_work_order(NewWorkOrder {
        property_id: hq.id,
        title: String::from("Exterior Building Painting"),
        description: String::from("Complete repaint of the administrative building facade"),
        status: Some(WorkOrderStatus::Completed),
        priority: WorkOrderPriority::Low,
        assigned_to: String::from("Silva Painting & Renovation"),
        category: String::from("Painting"),
        due_date: now - Duration::days(5),
    });

    let annual: Duration = Duration::days(365);
    let climate_start = (now - Duration::days(120)).date();
    store.add_contract(NewContract {
        company: String::from("ABC Climate Services"),
        service: String::from("Air Conditioning Maintenance"),
        start_date: climate_start,
        end_date: climate_start + annual,
        value: 120_000.0,
        status: ContractStatus::Active,
        contact: String::from("Carlos Silva"),
        phone: String::from("(61) 3333-4444"),
        notes: None,
    });
    let electrical_start = (now - Duration::days(90)).date();
    store.add_contract(NewContract {
        company: String::from("Eletro Services Ltd"),
        service: String::from("Electrical Services"),
        start_date: electrical_start,
        end_date: electrical_start + annual,
        value: 85_000.0,
        status: ContractStatus::Active,
        contact: String::from("Maria Santos"),
        phone: String::from("(61) 2222-3333"),
        notes: None,
    });

    store.add_user(NewUser {
        name: String::from("João Silva"),
        email: String::from("joao.silva@agency.gov.br"),
        role: UserRole::Administrator,
        unit: String::from("Regional Superintendency DF"),
        status: UserStatus::Active,
        password: None,
    });
    store.add_user(NewUser {
        name: String::from("Maria Santos"),
        email: String::from("maria.santos@agency.gov.br"),
        role: UserRole::Manager,
        unit: String::from("Highway Post BR-040"),
        status: UserStatus::Active,
        password: None,
    });
    store.add_user(NewUser {
        name: String::from("Carlos Oliveira"),
        email: String::from("carlos.oliveira@contractor.com"),
        role: UserRole::Contractor,
        unit: String::from("ABC Climate Services"),
        status: UserStatus::Active,
        password: None,
    });
}
