// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod aggregate;
mod error;
mod fixtures;
mod store;

#[cfg(test)]
mod tests;

pub use aggregate::{ChartBreakdowns, DashboardStats, chart_breakdowns, dashboard_stats};
pub use error::{DeleteOutcome, StoreError};
pub use fixtures::{seed, seeded_store};
pub use store::{
    ContractPatch, EntityStore, NewContract, NewProperty, NewUser, NewWorkOrder, PropertyPatch,
    UNKNOWN_PROPERTY, UserPatch, WorkOrderPatch,
};
