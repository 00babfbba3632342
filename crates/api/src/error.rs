// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the boundary layer.

use crate::reports::ProjectionError;
use predial::StoreError;

/// Boundary-layer errors.
///
/// These are distinct from store errors and represent the console's
/// user-facing contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A requested record was not found.
    ResourceNotFound {
        /// The type of record that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// An internal error occurred.
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::ResourceNotFound {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} not found: {message}")
            }
            Self::Internal { message } => {
                write!(f, "Internal error: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

impl From<ProjectionError> for ApiError {
    fn from(err: ProjectionError) -> Self {
        Self::Internal {
            message: err.to_string(),
        }
    }
}

/// Translates a store error into an API error.
///
/// This translation is explicit and ensures store errors are not leaked
/// directly.
#[must_use]
pub fn translate_store_error(err: StoreError) -> ApiError {
    match err {
        StoreError::PropertyNotFound(id) => ApiError::ResourceNotFound {
            resource_type: String::from("Property"),
            message: format!("Property {id} does not exist"),
        },
        StoreError::WorkOrderNotFound(id) => ApiError::ResourceNotFound {
            resource_type: String::from("Work order"),
            message: format!("Work order '{id}' does not exist"),
        },
        StoreError::ContractNotFound(id) => ApiError::ResourceNotFound {
            resource_type: String::from("Contract"),
            message: format!("Contract '{id}' does not exist"),
        },
        StoreError::UserNotFound(id) => ApiError::ResourceNotFound {
            resource_type: String::from("User"),
            message: format!("User {id} does not exist"),
        },
    }
}
