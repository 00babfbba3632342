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

mod error;
mod filters;
mod handlers;
mod reports;
mod session;
mod validators;

#[cfg(test)]
mod tests;

pub use error::{ApiError, translate_store_error};
pub use filters::{filter_contracts, filter_properties, filter_users, filter_work_orders};
pub use handlers::{
    delete_contract, delete_property, delete_user, delete_work_order, save_contract,
    save_property, save_user, save_work_order,
};
pub use reports::{
    ProjectionError, chart_data_json, contracts_csv, properties_csv, users_csv, work_orders_csv,
};
pub use session::{Session, SessionUser, login};
pub use validators::{
    DATE_INPUT_FORMAT, user_form_validator, validate_contract_form, validate_property_form,
    validate_work_order_form,
};
