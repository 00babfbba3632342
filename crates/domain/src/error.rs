// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use time::Date;

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Property category string is not recognized.
    InvalidPropertyCategory(String),
    /// Property status string is not recognized.
    InvalidPropertyStatus(String),
    /// Work order status string is not recognized.
    InvalidWorkOrderStatus(String),
    /// Work order priority string is not recognized.
    InvalidWorkOrderPriority(String),
    /// Contract status string is not recognized.
    InvalidContractStatus(String),
    /// User role string is not recognized.
    InvalidUserRole(String),
    /// User status string is not recognized.
    InvalidUserStatus(String),
    /// Email address does not have a plausible shape.
    InvalidEmail(String),
    /// Contract end date precedes its start date.
    InvalidDateRange {
        /// The contract start date.
        start: Date,
        /// The offending end date.
        end: Date,
    },
    /// A numeric amount that must be positive was not.
    InvalidAmount {
        /// The field the amount was supplied for.
        field: &'static str,
        /// The offending value.
        value: f64,
    },
    /// Password is shorter than the minimum length.
    PasswordTooShort {
        /// The minimum accepted length.
        min_length: usize,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidPropertyCategory(s) => write!(f, "Unknown property category: {s}"),
            Self::InvalidPropertyStatus(s) => write!(f, "Unknown property status: {s}"),
            Self::InvalidWorkOrderStatus(s) => write!(f, "Unknown work order status: {s}"),
            Self::InvalidWorkOrderPriority(s) => write!(f, "Unknown work order priority: {s}"),
            Self::InvalidContractStatus(s) => write!(f, "Unknown contract status: {s}"),
            Self::InvalidUserRole(s) => write!(f, "Unknown user role: {s}"),
            Self::InvalidUserStatus(s) => write!(f, "Unknown user status: {s}"),
            Self::InvalidEmail(s) => write!(f, "Email address '{s}' is not valid"),
            Self::InvalidDateRange { start, end } => {
                write!(f, "End date {end} precedes start date {start}")
            }
            Self::InvalidAmount { field, value } => {
                write!(f, "Value for '{field}' must be positive, got {value}")
            }
            Self::PasswordTooShort { min_length } => {
                write!(f, "Password must be at least {min_length} characters long")
            }
        }
    }
}

impl std::error::Error for DomainError {}
