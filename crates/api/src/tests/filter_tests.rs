// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::filters::{filter_contracts, filter_properties, filter_users, filter_work_orders};
use crate::tests::helpers::seeded_test_store;
use predial::EntityStore;
use predial_domain::{Contract, Property, PropertyStatus, User, UserRole, WorkOrder, WorkOrderStatus};

#[test]
fn test_filter_properties_matches_name_and_location_case_insensitively() {
    let store: EntityStore = seeded_test_store();

    let by_name: Vec<&Property> = filter_properties(store.properties(), "HIGHWAY", None);
    assert_eq!(by_name.len(), 1);
    assert_eq!(by_name[0].name, "Highway Post BR-040");

    let by_location: Vec<&Property> = filter_properties(store.properties(), "taguatinga", None);
    assert_eq!(by_location.len(), 1);
}

#[test]
fn test_filter_properties_combines_search_and_status() {
    let store: EntityStore = seeded_test_store();

    let active: Vec<&Property> =
        filter_properties(store.properties(), "", Some(PropertyStatus::Active));
    assert_eq!(active.len(), 2);

    let none: Vec<&Property> =
        filter_properties(store.properties(), "Highway", Some(PropertyStatus::UnderMaintenance));
    assert!(none.is_empty());
}

#[test]
fn test_filter_properties_empty_search_returns_everything() {
    let store: EntityStore = seeded_test_store();
    let all: Vec<&Property> = filter_properties(store.properties(), "", None);
    assert_eq!(all.len(), store.properties().len());
}

#[test]
fn test_filter_work_orders_matches_title_and_property_name() {
    let store: EntityStore = seeded_test_store();

    let by_title: Vec<&WorkOrder> = filter_work_orders(store.work_orders(), "painting", None);
    assert_eq!(by_title.len(), 1);

    let by_property: Vec<&WorkOrder> =
        filter_work_orders(store.work_orders(), "superintendency", None);
    assert_eq!(by_property.len(), 2);
}

#[test]
fn test_filter_work_orders_by_status() {
    let store: EntityStore = seeded_test_store();
    let open: Vec<&WorkOrder> =
        filter_work_orders(store.work_orders(), "", Some(WorkOrderStatus::Open));
    assert_eq!(open.len(), 1);
    assert_eq!(open[0].title, "Electrical System Repair");
}

#[test]
fn test_filter_contracts_matches_company_and_service() {
    let store: EntityStore = seeded_test_store();

    let by_company: Vec<&Contract> = filter_contracts(store.contracts(), "eletro");
    assert_eq!(by_company.len(), 1);

    let by_service: Vec<&Contract> = filter_contracts(store.contracts(), "air conditioning");
    assert_eq!(by_service.len(), 1);
    assert_eq!(by_service[0].company, "ABC Climate Services");
}

#[test]
fn test_filter_users_matches_email_and_role() {
    let store: EntityStore = seeded_test_store();

    let by_email: Vec<&User> = filter_users(store.users(), "maria.santos", None);
    assert_eq!(by_email.len(), 1);

    let contractors: Vec<&User> =
        filter_users(store.users(), "", Some(UserRole::Contractor));
    assert_eq!(contractors.len(), 1);
    assert_eq!(contractors[0].name, "Carlos Oliveira");
}
