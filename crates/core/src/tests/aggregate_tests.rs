// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::aggregate::{ChartBreakdowns, DashboardStats, chart_breakdowns, dashboard_stats};
use crate::fixtures::seed;
use crate::store::EntityStore;
use crate::tests::helpers::{mixed_store, new_work_order, test_store};
use predial_domain::WorkOrderStatus;

#[test]
fn test_dashboard_stats_counts_by_predicate() {
    let store: EntityStore = mixed_store();
    let stats: DashboardStats = dashboard_stats(&store);

    assert_eq!(stats.total_properties, 3);
    assert_eq!(stats.active_properties, 1);
    assert_eq!(stats.total_work_orders, 3);
    assert_eq!(stats.open_work_orders, 1);
    assert_eq!(stats.in_progress_work_orders, 1);
    assert_eq!(stats.completed_work_orders, 1);
    assert_eq!(stats.active_contracts, 0);
}

#[test]
fn test_dashboard_stats_status_counts_sum_to_total() {
    let mut store: EntityStore = test_store();
    seed(&mut store);
    let stats: DashboardStats = dashboard_stats(&store);

    assert_eq!(
        stats.open_work_orders + stats.in_progress_work_orders + stats.completed_work_orders,
        stats.total_work_orders
    );
}

#[test]
fn test_dashboard_stats_on_empty_store_is_all_zero() {
    let store: EntityStore = test_store();
    let stats: DashboardStats = dashboard_stats(&store);

    assert_eq!(stats.total_properties, 0);
    assert_eq!(stats.active_properties, 0);
    assert_eq!(stats.total_work_orders, 0);
    assert_eq!(stats.active_contracts, 0);
}

#[test]
fn test_dashboard_stats_reflects_mutations() {
    let mut store: EntityStore = test_store();
    let before: DashboardStats = dashboard_stats(&store);
    assert_eq!(before.total_work_orders, 0);

    store.add_work_order(new_work_order(1, "AC Maintenance"));
    let after: DashboardStats = dashboard_stats(&store);
    assert_eq!(after.total_work_orders, 1);
    assert_eq!(after.open_work_orders, 1);
}

#[test]
fn test_chart_breakdowns_zero_fills_every_status() {
    let store: EntityStore = test_store();
    let breakdowns: ChartBreakdowns = chart_breakdowns(&store);

    assert_eq!(breakdowns.work_orders_by_status.len(), 3);
    for status in WorkOrderStatus::ALL {
        assert_eq!(breakdowns.work_orders_by_status.get(&status), Some(&0));
    }
    assert!(breakdowns.work_orders_by_category.is_empty());
}

#[test]
fn test_chart_breakdowns_counts_only_present_categories() {
    let mut store: EntityStore = test_store();
    let mut first = new_work_order(1, "AC Maintenance");
    first.category = String::from("Climate Control");
    store.add_work_order(first);
    let mut second = new_work_order(1, "More AC Maintenance");
    second.category = String::from("Climate Control");
    store.add_work_order(second);
    let mut third = new_work_order(1, "Wiring Inspection");
    third.category = String::from("Electrical");
    store.add_work_order(third);

    let breakdowns: ChartBreakdowns = chart_breakdowns(&store);

    assert_eq!(
        breakdowns.work_orders_by_category.get("Climate Control"),
        Some(&2)
    );
    assert_eq!(
        breakdowns.work_orders_by_category.get("Electrical"),
        Some(&1)
    );
    // Categories with no work orders are absent, not zero-filled.
    assert_eq!(breakdowns.work_orders_by_category.get("Painting"), None);
}

#[test]
fn test_aggregation_is_idempotent_between_mutations() {
    let mut store: EntityStore = test_store();
    seed(&mut store);

    let first_stats: DashboardStats = dashboard_stats(&store);
    let second_stats: DashboardStats = dashboard_stats(&store);
    assert_eq!(first_stats, second_stats);

    let first_charts: ChartBreakdowns = chart_breakdowns(&store);
    let second_charts: ChartBreakdowns = chart_breakdowns(&store);
    assert_eq!(first_charts, second_charts);
}

#[test]
fn test_seeded_store_matches_fixture_counts() {
    let mut store: EntityStore = test_store();
    seed(&mut store);

    let stats: DashboardStats = dashboard_stats(&store);
    assert_eq!(stats.total_properties, 3);
    assert_eq!(stats.active_properties, 2);
    assert_eq!(stats.total_work_orders, 3);
    assert_eq!(stats.open_work_orders, 1);
    assert_eq!(stats.in_progress_work_orders, 1);
    assert_eq!(stats.completed_work_orders, 1);
    assert_eq!(stats.active_contracts, 2);

    // The seeded orders reference real properties, so every cached name
    // resolves.
    for order in store.work_orders() {
        assert_eq!(
            order.property_name,
            store.find_property(order.property_id).unwrap().name
        );
    }
}
