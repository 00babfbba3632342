// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::store::EntityStore;
use predial_domain::{ContractStatus, PropertyStatus, WorkOrderStatus};
use serde::Serialize;
use std::collections::BTreeMap;

/// Operational counts shown on the dashboard.
///
/// Every count is a plain predicate filter over the current collections;
/// there is no windowing by date range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardStats {
    /// Total number of properties.
    pub total_properties: usize,
    /// Properties with status Active.
    pub active_properties: usize,
    /// Total number of work orders.
    pub total_work_orders: usize,
    /// Work orders with status Open.
    pub open_work_orders: usize,
    /// Work orders with status In Progress.
    pub in_progress_work_orders: usize,
    /// Work orders with status Completed.
    pub completed_work_orders: usize,
    /// Contracts with status Active.
    pub active_contracts: usize,
}

/// Chart-ready breakdowns of the work orders collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartBreakdowns {
    /// Count per status. Every status is present, defaulting to zero.
    pub work_orders_by_status: BTreeMap<WorkOrderStatus, usize>,
    /// Count per category label. Only categories present in the data
    /// appear; absent categories are absent, not zero-filled.
    pub work_orders_by_category: BTreeMap<String, usize>,
}

/// Derives the dashboard counts from the store's current collections.
///
/// Pure and deterministic: calling it twice without an intervening
/// mutation yields value-equal results.
#[must_use]
pub fn dashboard_stats(store: &EntityStore) -> DashboardStats {
    let work_orders_with = |status: WorkOrderStatus| -> usize {
        store
            .work_orders()
            .iter()
            .filter(|wo| wo.status == status)
            .count()
    };

    DashboardStats {
        total_properties: store.properties().len(),
        active_properties: store
            .properties()
            .iter()
            .filter(|p| p.status == PropertyStatus::Active)
            .count(),
        total_work_orders: store.work_orders().len(),
        open_work_orders: work_orders_with(WorkOrderStatus::Open),
        in_progress_work_orders: work_orders_with(WorkOrderStatus::InProgress),
        completed_work_orders: work_orders_with(WorkOrderStatus::Completed),
        active_contracts: store
            .contracts()
            .iter()
            .filter(|c| c.status == ContractStatus::Active)
            .count(),
    }
}

/// Derives the chart breakdowns from the store's current collections.
///
/// Pure and deterministic, like [`dashboard_stats`].
#[must_use]
pub fn chart_breakdowns(store: &EntityStore) -> ChartBreakdowns {
    let mut by_status: BTreeMap<WorkOrderStatus, usize> = WorkOrderStatus::ALL
        .iter()
        .map(|status| (*status, 0))
        .collect();
    let mut by_category: BTreeMap<String, usize> = BTreeMap::new();

    for work_order in store.work_orders() {
        if let Some(count) = by_status.get_mut(&work_order.status) {
            *count += 1;
        }
        *by_category.entry(work_order.category.clone()).or_insert(0) += 1;
    }

    ChartBreakdowns {
        work_orders_by_status: by_status,
        work_orders_by_category: by_category,
    }
}
