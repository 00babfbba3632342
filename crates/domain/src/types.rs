// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::{Date, OffsetDateTime};

/// Canonical numeric identifier for a property.
///
/// Assigned by the entity store from a monotonically increasing counter;
/// unique and stable for the record's lifetime.
pub type PropertyId = u32;

/// Canonical numeric identifier for a user, same assignment rule as
/// [`PropertyId`].
pub type UserId = u32;

/// The known work order category labels, in form-option order.
///
/// The category set is open to extension, so a work order stores its
/// category as a plain string; these constants only seed option lists.
pub const WORK_ORDER_CATEGORIES: [&str; 6] = [
    "Climate Control",
    "Electrical",
    "Plumbing",
    "Painting",
    "Structural",
    "Cleaning",
];

/// Classifies a property by its operational function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum PropertyCategory {
    /// Administrative headquarters building.
    #[default]
    AdministrativeHq,
    /// Roadside operational post.
    OperationalPost,
    /// Operational base.
    OperationalBase,
    /// Precinct building.
    Precinct,
}

impl PropertyCategory {
    /// Converts this category to its display string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::AdministrativeHq => "Administrative HQ",
            Self::OperationalPost => "Operational Post",
            Self::OperationalBase => "Operational Base",
            Self::Precinct => "Precinct",
        }
    }
}

impl FromStr for PropertyCategory {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Administrative HQ" => Ok(Self::AdministrativeHq),
            "Operational Post" => Ok(Self::OperationalPost),
            "Operational Base" => Ok(Self::OperationalBase),
            "Precinct" => Ok(Self::Precinct),
            _ => Err(DomainError::InvalidPropertyCategory(s.to_string())),
        }
    }
}

impl std::fmt::Display for PropertyCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Operational status of a property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum PropertyStatus {
    /// Property is in regular use.
    #[default]
    Active,
    /// Property is undergoing maintenance work.
    UnderMaintenance,
    /// Property is out of use.
    Inactive,
}

impl PropertyStatus {
    /// Converts this status to its display string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::UnderMaintenance => "Under Maintenance",
            Self::Inactive => "Inactive",
        }
    }
}

impl FromStr for PropertyStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Active" => Ok(Self::Active),
            "Under Maintenance" => Ok(Self::UnderMaintenance),
            "Inactive" => Ok(Self::Inactive),
            _ => Err(DomainError::InvalidPropertyStatus(s.to_string())),
        }
    }
}

impl std::fmt::Display for PropertyStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Lifecycle status of a work order.
///
/// The variant order is the canonical display order for dashboards and
/// chart breakdowns; `Ord` follows it.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub enum WorkOrderStatus {
    /// Work order has been created and not yet started.
    #[default]
    Open,
    /// Work is underway.
    InProgress,
    /// Work has been finished.
    Completed,
}

impl WorkOrderStatus {
    /// All statuses, in display order. Chart breakdowns key on every one
    /// of these even when its count is zero.
    pub const ALL: [Self; 3] = [Self::Open, Self::InProgress, Self::Completed];

    /// Converts this status to its display string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "Open",
            Self::InProgress => "In Progress",
            Self::Completed => "Completed",
        }
    }
}

impl FromStr for WorkOrderStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Open" => Ok(Self::Open),
            "In Progress" => Ok(Self::InProgress),
            "Completed" => Ok(Self::Completed),
            _ => Err(DomainError::InvalidWorkOrderStatus(s.to_string())),
        }
    }
}

impl std::fmt::Display for WorkOrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Urgency of a work order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub enum WorkOrderPriority {
    /// Can wait.
    Low,
    /// Default urgency.
    #[default]
    Medium,
    /// Needs prompt attention.
    High,
}

impl WorkOrderPriority {
    /// Converts this priority to its display string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

impl FromStr for WorkOrderPriority {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Low" => Ok(Self::Low),
            "Medium" => Ok(Self::Medium),
            "High" => Ok(Self::High),
            _ => Err(DomainError::InvalidWorkOrderPriority(s.to_string())),
        }
    }
}

impl std::fmt::Display for WorkOrderPriority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Lifecycle status of a service contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ContractStatus {
    /// Contract is in force.
    #[default]
    Active,
    /// Contract is temporarily suspended.
    Suspended,
    /// Contract has run out.
    Expired,
}

impl ContractStatus {
    /// Converts this status to its display string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Suspended => "Suspended",
            Self::Expired => "Expired",
        }
    }
}

impl FromStr for ContractStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Active" => Ok(Self::Active),
            "Suspended" => Ok(Self::Suspended),
            "Expired" => Ok(Self::Expired),
            _ => Err(DomainError::InvalidContractStatus(s.to_string())),
        }
    }
}

impl std::fmt::Display for ContractStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Role of a console user.
///
/// Roles are display classifications only; no authorization is derived
/// from them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum UserRole {
    /// Full administrative staff.
    Administrator,
    /// Unit manager.
    Manager,
    /// Maintenance technician.
    #[default]
    Technician,
    /// External contractor staff.
    Contractor,
}

impl UserRole {
    /// Converts this role to its display string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Administrator => "Administrator",
            Self::Manager => "Manager",
            Self::Technician => "Technician",
            Self::Contractor => "Contractor",
        }
    }
}

impl FromStr for UserRole {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Administrator" => Ok(Self::Administrator),
            "Manager" => Ok(Self::Manager),
            "Technician" => Ok(Self::Technician),
            "Contractor" => Ok(Self::Contractor),
            _ => Err(DomainError::InvalidUserRole(s.to_string())),
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Whether a user account is enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum UserStatus {
    /// Account is enabled.
    #[default]
    Active,
    /// Account is disabled.
    Inactive,
}

impl UserStatus {
    /// Converts this status to its display string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Inactive => "Inactive",
        }
    }
}

impl FromStr for UserStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Active" => Ok(Self::Active),
            "Inactive" => Ok(Self::Inactive),
            _ => Err(DomainError::InvalidUserStatus(s.to_string())),
        }
    }
}

impl std::fmt::Display for UserStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A tracked property (building, post, or base).
///
/// Owned exclusively by the entity store; `id` is unique and stable for
/// the record's lifetime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    /// Canonical identifier, assigned at creation.
    pub id: PropertyId,
    /// Display name.
    pub name: String,
    /// City / region label.
    pub location: String,
    /// Operational classification.
    pub category: PropertyCategory,
    /// Constructed area in square meters. Positive; enforced at
    /// form-validation time.
    pub built_area: f64,
    /// Operational status.
    pub status: PropertyStatus,
    /// When maintenance was last performed.
    pub last_maintenance: OffsetDateTime,
    /// When the next maintenance is scheduled.
    pub next_maintenance: OffsetDateTime,
    /// Optional free-text notes.
    pub notes: Option<String>,
}

/// A maintenance work order against a property.
///
/// `property_name` is a denormalized copy of the referenced property's
/// name, captured at the time of the last save. The store re-resolves it
/// when a patch changes `property_id` without supplying a name; it is
/// never rewritten when the property itself is renamed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkOrder {
    /// Identifier of shape `OS-<year>-<sequence>`, zero-padded to 3 digits.
    pub id: String,
    /// The property this order belongs to.
    pub property_id: PropertyId,
    /// Cached name of the owning property at last save.
    pub property_name: String,
    /// Short title.
    pub title: String,
    /// Full description of the work.
    pub description: String,
    /// Lifecycle status.
    pub status: WorkOrderStatus,
    /// Urgency.
    pub priority: WorkOrderPriority,
    /// Contractor or company responsible for the work.
    pub assigned_to: String,
    /// Category label; open set, see [`WORK_ORDER_CATEGORIES`].
    pub category: String,
    /// Set at creation, immutable thereafter.
    pub created_date: OffsetDateTime,
    /// Deadline; mutable.
    pub due_date: OffsetDateTime,
}

/// A service contract with an external company.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contract {
    /// Identifier of shape `CTR-<year>-<sequence>`, zero-padded to 3 digits.
    pub id: String,
    /// Contracted company name.
    pub company: String,
    /// Contracted service category.
    pub service: String,
    /// First day the contract is in force.
    pub start_date: Date,
    /// Last day the contract is in force. Never precedes `start_date`;
    /// enforced at form-validation time, not by the store.
    pub end_date: Date,
    /// Monetary value. Positive; enforced at form-validation time.
    pub value: f64,
    /// Lifecycle status.
    pub status: ContractStatus,
    /// Contact person at the company.
    pub contact: String,
    /// Contact phone number.
    pub phone: String,
    /// Optional free-text notes.
    pub notes: Option<String>,
}

/// A console user.
///
/// Passwords are accepted at creation/update time but never stored; see
/// the entity store input types.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Canonical identifier, assigned at creation.
    pub id: UserId,
    /// Full name.
    pub name: String,
    /// Email address; basic shape validated at the form layer.
    pub email: String,
    /// Display role.
    pub role: UserRole,
    /// Unit or organization label.
    pub unit: String,
    /// Account status.
    pub status: UserStatus,
}
