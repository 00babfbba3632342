// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use predial_domain::{PropertyId, UserId};

/// Errors produced by entity store mutations.
///
/// The store never rejects field contents (validation happens at the form
/// layer before a mutation is issued); the only failure it reports is a
/// patch addressed to an identifier that does not exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// No property with the given identifier exists.
    PropertyNotFound(PropertyId),
    /// No work order with the given identifier exists.
    WorkOrderNotFound(String),
    /// No contract with the given identifier exists.
    ContractNotFound(String),
    /// No user with the given identifier exists.
    UserNotFound(UserId),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PropertyNotFound(id) => write!(f, "Property {id} not found"),
            Self::WorkOrderNotFound(id) => write!(f, "Work order '{id}' not found"),
            Self::ContractNotFound(id) => write!(f, "Contract '{id}' not found"),
            Self::UserNotFound(id) => write!(f, "User {id} not found"),
        }
    }
}

impl std::error::Error for StoreError {}

/// The result of a delete operation.
///
/// Deleting is idempotent and never fails: removing an identifier that is
/// already absent leaves the collection unchanged. The outcome still
/// distinguishes the two cases so callers can report them differently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum DeleteOutcome {
    /// A record was removed.
    Deleted,
    /// No record matched; the collection is unchanged.
    NotFound,
}

impl DeleteOutcome {
    /// Returns whether a record was actually removed.
    #[must_use]
    pub const fn is_deleted(&self) -> bool {
        matches!(self, Self::Deleted)
    }
}
