// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::collections::{BTreeMap, BTreeSet};
use std::future::Future;

/// Current field values of a form, keyed by field name. Every value is
/// the raw input text; parsing into domain types happens after
/// validation, in the submit callback.
pub type FieldValues = BTreeMap<String, String>;

/// Validation errors keyed by field name. A field absent from the map is
/// valid.
pub type FieldErrors = BTreeMap<String, String>;

/// The result of a submit attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum SubmitOutcome {
    /// Validation passed and the callback ran. A failure inside the
    /// callback is logged and swallowed, not reflected here.
    Accepted,
    /// Validation failed; the callback was not invoked and all errors
    /// are surfaced for display.
    Rejected,
}

/// Generic per-field validation state machine shared by every
/// entity-editing form.
///
/// A controller is parametrized by an initial value record and a
/// validation function over the full candidate value set. Each field
/// moves `untouched -> touched` on blur and is then revalidated on every
/// subsequent change; the change path updates only the changed field's
/// error entry, leaving errors for other fields as last computed. This
/// narrow revalidation is deliberate, not an oversight.
///
/// The controller owns its state exclusively and holds no reference to
/// the entity store; it reaches the rest of the system only through the
/// submit callback. It provides no reentrancy guard: callers must
/// disable the submit trigger while [`Self::is_submitting`] is true.
pub struct FormController {
    initial: FieldValues,
    values: FieldValues,
    errors: FieldErrors,
    touched: BTreeSet<String>,
    submitting: bool,
    validate: Box<dyn Fn(&FieldValues) -> FieldErrors + Send + Sync>,
}

impl std::fmt::Debug for FormController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormController")
            .field("values", &self.values)
            .field("errors", &self.errors)
            .field("touched", &self.touched)
            .field("submitting", &self.submitting)
            .finish_non_exhaustive()
    }
}

impl FormController {
    /// Creates a controller over an initial value record and a
    /// validation function.
    ///
    /// # Arguments
    ///
    /// * `initial` - Field values the form starts from and resets to
    /// * `validate` - Returns an error entry for every currently invalid
    ///   field, given the full candidate value set
    #[must_use]
    pub fn new(
        initial: FieldValues,
        validate: impl Fn(&FieldValues) -> FieldErrors + Send + Sync + 'static,
    ) -> Self {
        Self {
            values: initial.clone(),
            initial,
            errors: FieldErrors::new(),
            touched: BTreeSet::new(),
            submitting: false,
            validate: Box::new(validate),
        }
    }

    /// Current value of a field.
    #[must_use]
    pub fn value(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Current values of all fields.
    #[must_use]
    pub const fn values(&self) -> &FieldValues {
        &self.values
    }

    /// Current error text for a field, if it is invalid.
    #[must_use]
    pub fn error(&self, name: &str) -> Option<&str> {
        self.errors.get(name).map(String::as_str)
    }

    /// All current field errors.
    #[must_use]
    pub const fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Whether a field has been touched (blurred at least once, or
    /// swept by a submit attempt).
    #[must_use]
    pub fn is_touched(&self, name: &str) -> bool {
        self.touched.contains(name)
    }

    /// Whether a submit is currently in flight.
    #[must_use]
    pub const fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Updates a field value.
    ///
    /// The value is stored unconditionally. If the field is already
    /// touched, the full validation function runs against the merged
    /// values and only this field's error entry is updated; errors for
    /// other fields are left as last computed.
    pub fn change(&mut self, name: &str, value: impl Into<String>) {
        self.values.insert(name.to_string(), value.into());
        if self.touched.contains(name) {
            self.revalidate_field(name);
        }
    }

    /// Marks a field touched and validates it against the current full
    /// value set, updating only its own error entry.
    pub fn blur(&mut self, name: &str) {
        self.touched.insert(name.to_string());
        self.revalidate_field(name);
    }

    /// Replaces the current values wholesale.
    ///
    /// Used when an edit dialog opens over an existing record. Errors,
    /// touched flags, and the submitting flag are left as they are.
    pub fn set_values(&mut self, values: FieldValues) {
        self.values = values;
    }

    /// Runs the submit lifecycle.
    ///
    /// Marks every field touched and validates the full value set. If
    /// any error results, the callback is not invoked, all errors are
    /// surfaced, and the outcome is [`SubmitOutcome::Rejected`].
    /// Otherwise the callback receives the current values; if it fails,
    /// the failure is logged and swallowed — the caller is expected to
    /// wrap its own business logic with its own user-facing reporting.
    /// The submitting flag is cleared on every path.
    pub async fn submit<F, Fut, E>(&mut self, callback: F) -> SubmitOutcome
    where
        F: FnOnce(FieldValues) -> Fut,
        Fut: Future<Output = Result<(), E>>,
        E: std::fmt::Display,
    {
        self.submitting = true;
        self.touched.extend(self.values.keys().cloned());

        self.errors = (self.validate)(&self.values);
        if !self.errors.is_empty() {
            self.submitting = false;
            return SubmitOutcome::Rejected;
        }

        if let Err(err) = callback(self.values.clone()).await {
            tracing::error!("Form submission callback failed: {err}");
        }
        self.submitting = false;
        SubmitOutcome::Accepted
    }

    /// Restores the initial values and clears errors, touched flags,
    /// and the submitting flag.
    pub fn reset(&mut self) {
        self.values = self.initial.clone();
        self.errors.clear();
        self.touched.clear();
        self.submitting = false;
    }

    fn revalidate_field(&mut self, name: &str) {
        let field_errors: FieldErrors = (self.validate)(&self.values);
        match field_errors.get(name) {
            Some(message) => {
                self.errors.insert(name.to_string(), message.clone());
            }
            None => {
                self.errors.remove(name);
            }
        }
    }
}
