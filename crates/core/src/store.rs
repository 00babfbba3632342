// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::{DeleteOutcome, StoreError};
use predial_domain::{
    Contract, ContractStatus, Property, PropertyCategory, PropertyId, PropertyStatus, User,
    UserId, UserRole, UserStatus, WorkOrder, WorkOrderPriority, WorkOrderStatus,
};
use time::{Date, Duration, OffsetDateTime};

/// Display label for a work order whose property reference no longer
/// resolves. Cross-reference inconsistency is tolerated, not an error.
pub const UNKNOWN_PROPERTY: &str = "Unknown";

/// Interval applied to `next_maintenance` when a new property does not
/// supply one.
const DEFAULT_MAINTENANCE_INTERVAL: Duration = Duration::days(90);

/// Input for creating a property. The store assigns the identifier.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProperty {
    /// Display name.
    pub name: String,
    /// City / region label.
    pub location: String,
    /// Operational classification.
    pub category: PropertyCategory,
    /// Constructed area in square meters.
    pub built_area: f64,
    /// Operational status.
    pub status: PropertyStatus,
    /// Defaults to the creation time when absent.
    pub last_maintenance: Option<OffsetDateTime>,
    /// Defaults to the creation time plus 90 days when absent.
    pub next_maintenance: Option<OffsetDateTime>,
    /// Optional free-text notes.
    pub notes: Option<String>,
}

/// Partial update for a property. `None` fields are left unchanged
/// (shallow merge).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PropertyPatch {
    /// Identifier of the record to patch.
    pub id: PropertyId,
    /// New display name.
    pub name: Option<String>,
    /// New location label.
    pub location: Option<String>,
    /// New classification.
    pub category: Option<PropertyCategory>,
    /// New constructed area.
    pub built_area: Option<f64>,
    /// New operational status.
    pub status: Option<PropertyStatus>,
    /// New last-maintenance timestamp.
    pub last_maintenance: Option<OffsetDateTime>,
    /// New next-maintenance timestamp.
    pub next_maintenance: Option<OffsetDateTime>,
    /// New notes text.
    pub notes: Option<String>,
}

/// Input for creating a work order. The store synthesizes the identifier,
/// resolves the denormalized property name, and stamps the creation time.
#[derive(Debug, Clone, PartialEq)]
pub struct NewWorkOrder {
    /// The property the work is for.
    pub property_id: PropertyId,
    /// Short title.
    pub title: String,
    /// Full description of the work.
    pub description: String,
    /// Defaults to [`WorkOrderStatus::Open`] when absent.
    pub status: Option<WorkOrderStatus>,
    /// Urgency.
    pub priority: WorkOrderPriority,
    /// Contractor responsible for the work.
    pub assigned_to: String,
    /// Category label (open set).
    pub category: String,
    /// Deadline.
    pub due_date: OffsetDateTime,
}

/// Partial update for a work order.
///
/// `created_date` is immutable and therefore not patchable. When the
/// patch changes `property_id` and leaves `property_name` unset, the
/// store re-resolves the name from the current properties collection
/// before merging; this is the only cross-collection rule it enforces.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WorkOrderPatch {
    /// Identifier of the record to patch.
    pub id: String,
    /// New owning property.
    pub property_id: Option<PropertyId>,
    /// Explicit denormalized property name, overriding re-resolution.
    pub property_name: Option<String>,
    /// New title.
    pub title: Option<String>,
    /// New description.
    pub description: Option<String>,
    /// New lifecycle status.
    pub status: Option<WorkOrderStatus>,
    /// New urgency.
    pub priority: Option<WorkOrderPriority>,
    /// New assignee.
    pub assigned_to: Option<String>,
    /// New category label.
    pub category: Option<String>,
    /// New deadline.
    pub due_date: Option<OffsetDateTime>,
}

/// Input for creating a contract. The store synthesizes the identifier.
#[derive(Debug, Clone, PartialEq)]
pub struct NewContract {
    /// Contracted company name.
    pub company: String,
    /// Contracted service category.
    pub service: String,
    /// First day in force.
    pub start_date: Date,
    /// Last day in force. Date ordering is enforced at the form layer,
    /// not here.
    pub end_date: Date,
    /// Monetary value.
    pub value: f64,
    /// Lifecycle status.
    pub status: ContractStatus,
    /// Contact person.
    pub contact: String,
    /// Contact phone.
    pub phone: String,
    /// Optional free-text notes.
    pub notes: Option<String>,
}

/// Partial update for a contract.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ContractPatch {
    /// Identifier of the record to patch.
    pub id: String,
    /// New company name.
    pub company: Option<String>,
    /// New service category.
    pub service: Option<String>,
    /// New start date.
    pub start_date: Option<Date>,
    /// New end date.
    pub end_date: Option<Date>,
    /// New monetary value.
    pub value: Option<f64>,
    /// New lifecycle status.
    pub status: Option<ContractStatus>,
    /// New contact person.
    pub contact: Option<String>,
    /// New contact phone.
    pub phone: Option<String>,
    /// New notes text.
    pub notes: Option<String>,
}

/// Input for creating a user. The store assigns the identifier.
///
/// `password` is accepted for parity with the form payload but is never
/// stored; the minimum-length rule is enforced by the form validator on
/// creation only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    /// Full name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Display role.
    pub role: UserRole,
    /// Unit or organization label.
    pub unit: String,
    /// Account status.
    pub status: UserStatus,
    /// Accepted and discarded; never stored.
    pub password: Option<String>,
}

/// Partial update for a user. `password` is accepted and discarded,
/// matching [`NewUser`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UserPatch {
    /// Identifier of the record to patch.
    pub id: UserId,
    /// New full name.
    pub name: Option<String>,
    /// New email address.
    pub email: Option<String>,
    /// New display role.
    pub role: Option<UserRole>,
    /// New unit label.
    pub unit: Option<String>,
    /// New account status.
    pub status: Option<UserStatus>,
    /// Accepted and discarded; never stored.
    pub password: Option<String>,
}

/// The exclusive owner of the four in-memory collections.
///
/// All mutation goes through the `add_*`/`update_*`/`delete_*` methods;
/// reads go through the slice accessors. Identifiers are assigned from
/// monotonically increasing counters stored alongside each collection,
/// so a deletion never makes an identifier eligible for reuse.
///
/// The store owns an injectable clock so identifier-year synthesis and
/// maintenance defaults are deterministic under test.
#[derive(Debug, Clone)]
pub struct EntityStore {
    properties: Vec<Property>,
    work_orders: Vec<WorkOrder>,
    contracts: Vec<Contract>,
    users: Vec<User>,
    next_property_id: PropertyId,
    next_user_id: UserId,
    next_work_order_seq: u32,
    next_contract_seq: u32,
    clock: fn() -> OffsetDateTime,
}

impl EntityStore {
    /// Creates an empty store using the system UTC clock.
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(OffsetDateTime::now_utc)
    }

    /// Creates an empty store with an explicit clock.
    ///
    /// # Arguments
    ///
    /// * `clock` - Source of "now" for creation timestamps, maintenance
    ///   defaults, and identifier-year synthesis
    #[must_use]
    pub const fn with_clock(clock: fn() -> OffsetDateTime) -> Self {
        Self {
            properties: Vec::new(),
            work_orders: Vec::new(),
            contracts: Vec::new(),
            users: Vec::new(),
            next_property_id: 1,
            next_user_id: 1,
            next_work_order_seq: 1,
            next_contract_seq: 1,
            clock,
        }
    }

    /// The current time according to the store's clock.
    #[must_use]
    pub fn now(&self) -> OffsetDateTime {
        (self.clock)()
    }

    /// Read-only view of the properties collection.
    #[must_use]
    pub fn properties(&self) -> &[Property] {
        &self.properties
    }

    /// Read-only view of the work orders collection.
    #[must_use]
    pub fn work_orders(&self) -> &[WorkOrder] {
        &self.work_orders
    }

    /// Read-only view of the contracts collection.
    #[must_use]
    pub fn contracts(&self) -> &[Contract] {
        &self.contracts
    }

    /// Read-only view of the users collection.
    #[must_use]
    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// Looks up a property by identifier.
    #[must_use]
    pub fn find_property(&self, id: PropertyId) -> Option<&Property> {
        self.properties.iter().find(|p| p.id == id)
    }

    /// Looks up a work order by identifier.
    #[must_use]
    pub fn find_work_order(&self, id: &str) -> Option<&WorkOrder> {
        self.work_orders.iter().find(|wo| wo.id == id)
    }

    /// Looks up a contract by identifier.
    #[must_use]
    pub fn find_contract(&self, id: &str) -> Option<&Contract> {
        self.contracts.iter().find(|c| c.id == id)
    }

    /// Looks up a user by identifier.
    #[must_use]
    pub fn find_user(&self, id: UserId) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    /// Resolves the display name for a property reference, falling back
    /// to [`UNKNOWN_PROPERTY`] when the identifier no longer matches.
    #[must_use]
    pub fn resolve_property_name(&self, id: PropertyId) -> String {
        self.find_property(id)
            .map_or_else(|| UNKNOWN_PROPERTY.to_string(), |p| p.name.clone())
    }

    /// Adds a property and returns the stored record.
    ///
    /// The identifier comes from the property counter; maintenance
    /// timestamps default to "now" and "now plus 90 days" when the input
    /// does not supply them.
    pub fn add_property(&mut self, input: NewProperty) -> Property {
        let now: OffsetDateTime = self.now();
        let property = Property {
            id: self.next_property_id,
            name: input.name,
            location: input.location,
            category: input.category,
            built_area: input.built_area,
            status: input.status,
            last_maintenance: input.last_maintenance.unwrap_or(now),
            next_maintenance: input
                .next_maintenance
                .unwrap_or_else(|| now + DEFAULT_MAINTENANCE_INTERVAL),
            notes: input.notes,
        };
        self.next_property_id += 1;
        self.properties.push(property.clone());
        property
    }

    /// Applies a partial update to a property and returns the merged
    /// record.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::PropertyNotFound` if no record matches the
    /// patch identifier; the collection is left unchanged.
    pub fn update_property(&mut self, patch: PropertyPatch) -> Result<Property, StoreError> {
        let property: &mut Property = self
            .properties
            .iter_mut()
            .find(|p| p.id == patch.id)
            .ok_or(StoreError::PropertyNotFound(patch.id))?;

        if let Some(name) = patch.name {
            property.name = name;
        }
        if let Some(location) = patch.location {
            property.location = location;
        }
        if let Some(category) = patch.category {
            property.category = category;
        }
        if let Some(built_area) = patch.built_area {
            property.built_area = built_area;
        }
        if let Some(status) = patch.status {
            property.status = status;
        }
        if let Some(last_maintenance) = patch.last_maintenance {
            property.last_maintenance = last_maintenance;
        }
        if let Some(next_maintenance) = patch.next_maintenance {
            property.next_maintenance = next_maintenance;
        }
        if let Some(notes) = patch.notes {
            property.notes = Some(notes);
        }
        Ok(property.clone())
    }

    /// Removes a property. Removing an absent identifier is a no-op.
    pub fn delete_property(&mut self, id: PropertyId) -> DeleteOutcome {
        Self::remove_where(&mut self.properties, |p| p.id == id)
    }

    /// Adds a work order and returns the stored record.
    ///
    /// The identifier is synthesized as `OS-<year>-<sequence>` from the
    /// clock year and the work order counter. The denormalized property
    /// name is resolved from the current properties collection; status
    /// defaults to Open and the creation time is stamped from the clock.
    pub fn add_work_order(&mut self, input: NewWorkOrder) -> WorkOrder {
        let now: OffsetDateTime = self.now();
        let work_order = WorkOrder {
            id: format!("OS-{}-{:03}", now.year(), self.next_work_order_seq),
            property_id: input.property_id,
            property_name: self.resolve_property_name(input.property_id),
            title: input.title,
            description: input.description,
            status: input.status.unwrap_or_default(),
            priority: input.priority,
            assigned_to: input.assigned_to,
            category: input.category,
            created_date: now,
            due_date: input.due_date,
        };
        self.next_work_order_seq += 1;
        self.work_orders.push(work_order.clone());
        work_order
    }

    /// Applies a partial update to a work order and returns the merged
    /// record.
    ///
    /// If the patch changes `property_id` without supplying
    /// `property_name`, the name is re-resolved from the current
    /// properties collection before the merge.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::WorkOrderNotFound` if no record matches the
    /// patch identifier.
    pub fn update_work_order(&mut self, patch: WorkOrderPatch) -> Result<WorkOrder, StoreError> {
        let resolved_name: Option<String> = match (&patch.property_id, &patch.property_name) {
            (Some(property_id), None) => Some(self.resolve_property_name(*property_id)),
            _ => patch.property_name.clone(),
        };

        let work_order: &mut WorkOrder = self
            .work_orders
            .iter_mut()
            .find(|wo| wo.id == patch.id)
            .ok_or_else(|| StoreError::WorkOrderNotFound(patch.id.clone()))?;

        if let Some(property_id) = patch.property_id {
            work_order.property_id = property_id;
        }
        if let Some(property_name) = resolved_name {
            work_order.property_name = property_name;
        }
        if let Some(title) = patch.title {
            work_order.title = title;
        }
        if let Some(description) = patch.description {
            work_order.description = description;
        }
        if let Some(status) = patch.status {
            work_order.status = status;
        }
        if let Some(priority) = patch.priority {
            work_order.priority = priority;
        }
        if let Some(assigned_to) = patch.assigned_to {
            work_order.assigned_to = assigned_to;
        }
        if let Some(category) = patch.category {
            work_order.category = category;
        }
        if let Some(due_date) = patch.due_date {
            work_order.due_date = due_date;
        }
        Ok(work_order.clone())
    }

    /// Removes a work order. Removing an absent identifier is a no-op.
    pub fn delete_work_order(&mut self, id: &str) -> DeleteOutcome {
        Self::remove_where(&mut self.work_orders, |wo| wo.id == id)
    }

    /// Adds a contract and returns the stored record.
    ///
    /// The identifier is synthesized as `CTR-<year>-<sequence>` from the
    /// clock year and the contract counter.
    pub fn add_contract(&mut self, input: NewContract) -> Contract {
        let now: OffsetDateTime = self.now();
        let contract = Contract {
            id: format!("CTR-{}-{:03}", now.year(), self.next_contract_seq),
            company: input.company,
            service: input.service,
            start_date: input.start_date,
            end_date: input.end_date,
            value: input.value,
            status: input.status,
            contact: input.contact,
            phone: input.phone,
            notes: input.notes,
        };
        self.next_contract_seq += 1;
        self.contracts.push(contract.clone());
        contract
    }

    /// Applies a partial update to a contract and returns the merged
    /// record.
    ///
    /// The store accepts a patch that reverses the date ordering; that
    /// rule belongs to the form layer.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::ContractNotFound` if no record matches the
    /// patch identifier.
    pub fn update_contract(&mut self, patch: ContractPatch) -> Result<Contract, StoreError> {
        let contract: &mut Contract = self
            .contracts
            .iter_mut()
            .find(|c| c.id == patch.id)
            .ok_or_else(|| StoreError::ContractNotFound(patch.id.clone()))?;

        if let Some(company) = patch.company {
            contract.company = company;
        }
        if let Some(service) = patch.service {
            contract.service = service;
        }
        if let Some(start_date) = patch.start_date {
            contract.start_date = start_date;
        }
        if let Some(end_date) = patch.end_date {
            contract.end_date = end_date;
        }
        if let Some(value) = patch.value {
            contract.value = value;
        }
        if let Some(status) = patch.status {
            contract.status = status;
        }
        if let Some(contact) = patch.contact {
            contract.contact = contact;
        }
        if let Some(phone) = patch.phone {
            contract.phone = phone;
        }
        if let Some(notes) = patch.notes {
            contract.notes = Some(notes);
        }
        Ok(contract.clone())
    }

    /// Removes a contract. Removing an absent identifier is a no-op.
    pub fn delete_contract(&mut self, id: &str) -> DeleteOutcome {
        Self::remove_where(&mut self.contracts, |c| c.id == id)
    }

    /// Adds a user and returns the stored record.
    ///
    /// The password carried by the input is discarded.
    pub fn add_user(&mut self, input: NewUser) -> User {
        let user = User {
            id: self.next_user_id,
            name: input.name,
            email: input.email,
            role: input.role,
            unit: input.unit,
            status: input.status,
        };
        self.next_user_id += 1;
        self.users.push(user.clone());
        user
    }

    /// Applies a partial update to a user and returns the merged record.
    ///
    /// The password carried by the patch is discarded.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::UserNotFound` if no record matches the patch
    /// identifier.
    pub fn update_user(&mut self, patch: UserPatch) -> Result<User, StoreError> {
        let user: &mut User = self
            .users
            .iter_mut()
            .find(|u| u.id == patch.id)
            .ok_or(StoreError::UserNotFound(patch.id))?;

        if let Some(name) = patch.name {
            user.name = name;
        }
        if let Some(email) = patch.email {
            user.email = email;
        }
        if let Some(role) = patch.role {
            user.role = role;
        }
        if let Some(unit) = patch.unit {
            user.unit = unit;
        }
        if let Some(status) = patch.status {
            user.status = status;
        }
        Ok(user.clone())
    }

    /// Removes a user. Removing an absent identifier is a no-op.
    pub fn delete_user(&mut self, id: UserId) -> DeleteOutcome {
        Self::remove_where(&mut self.users, |u| u.id == id)
    }

    fn remove_where<T>(collection: &mut Vec<T>, matches: impl Fn(&T) -> bool) -> DeleteOutcome {
        let before: usize = collection.len();
        collection.retain(|item| !matches(item));
        if collection.len() < before {
            DeleteOutcome::Deleted
        } else {
            DeleteOutcome::NotFound
        }
    }
}

impl Default for EntityStore {
    fn default() -> Self {
        Self::new()
    }
}
