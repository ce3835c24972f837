//! Generic in-memory entity store.
//!
//! Each entity type (tours, users) gets its own [`EntityStore`] instance,
//! constructed once at process startup and injected into route handlers.
//! Records are kept in a plain `Vec` in insertion order and looked up by a
//! linear scan on their numeric ID.
//!
//! IDs are assigned by the store, start at 1, and only ever increase within a
//! process lifetime - a deleted record's ID is never reused. There is no
//! persistence; store contents reset on process restart.

use thiserror::Error;

/// Errors returned by [`EntityStore::add`].
///
/// Not-found is deliberately *not* an error variant: lookups return `Option`
/// and the HTTP layer owns the distinction between a malformed ID (400) and a
/// valid-but-absent one (404).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    /// One or more required fields were absent or empty.
    #[error("missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    /// A field was present but failed validation.
    #[error("invalid {field}: {reason}")]
    InvalidField {
        /// Name of the offending field.
        field: &'static str,
        /// Human-readable reason.
        reason: String,
    },

    /// A unique field collides with an existing record.
    #[error("duplicate {field}")]
    Duplicate {
        /// Name of the unique field.
        field: &'static str,
    },
}

/// A record type that can live in an [`EntityStore`].
///
/// The store owns ID allocation and sequencing; the entity supplies the
/// domain rules: which fields a creation draft must carry, when a draft
/// collides with an existing record, and how a partial patch merges into a
/// stored record.
pub trait Entity: Clone {
    /// Type-safe ID for this entity.
    type Id: Copy + Eq + From<i32>;

    /// Creation payload. Every field is optional at the wire level so the
    /// store can report exactly which required fields are missing.
    type Draft;

    /// Partial-update payload. Present fields overwrite, absent fields are
    /// retained.
    type Patch;

    /// Lowercase display name used in error messages ("tour", "user").
    const NAME: &'static str;

    /// The record's assigned ID.
    fn id(&self) -> Self::Id;

    /// Names of required fields that are absent or empty in `draft`.
    fn missing_fields(draft: &Self::Draft) -> Vec<&'static str>;

    /// The unique field on which `draft` collides with `existing`, if any.
    fn conflict(draft: &Self::Draft, existing: &Self) -> Option<&'static str> {
        let _ = (draft, existing);
        None
    }

    /// Assemble a record from a validated draft.
    ///
    /// Called only after [`missing_fields`](Entity::missing_fields) returned
    /// empty; may still reject a present-but-malformed field.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::InvalidField`] if a field fails validation.
    fn build(id: Self::Id, draft: Self::Draft) -> Result<Self, StoreError>;

    /// Shallow-merge `patch` into the record. No re-validation: a patch may
    /// introduce empty values, matching the permissive update semantics of
    /// the HTTP surface.
    fn apply(&mut self, patch: Self::Patch);
}

/// In-memory ordered collection of records keyed by an auto-incrementing ID.
#[derive(Debug, Clone)]
pub struct EntityStore<T: Entity> {
    records: Vec<T>,
    next_id: i32,
}

impl<T: Entity> Default for EntityStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Entity> EntityStore<T> {
    /// Create an empty store. The first assigned ID is 1.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            records: Vec::new(),
            next_id: 1,
        }
    }

    /// All current records in insertion order.
    #[must_use]
    pub fn all(&self) -> &[T] {
        &self.records
    }

    /// Number of records currently held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the store holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Validate `draft`, assign the next ID, and append the new record.
    ///
    /// The ID counter only advances on success; a failed add leaves the
    /// store completely unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::MissingFields`] when required fields are absent
    /// or empty, [`StoreError::Duplicate`] when the draft collides with an
    /// existing record on a unique field, and [`StoreError::InvalidField`]
    /// when a present field fails validation.
    pub fn add(&mut self, draft: T::Draft) -> Result<T, StoreError> {
        let missing = T::missing_fields(&draft);
        if !missing.is_empty() {
            return Err(StoreError::MissingFields(missing));
        }

        if let Some(field) = self
            .records
            .iter()
            .find_map(|existing| T::conflict(&draft, existing))
        {
            return Err(StoreError::Duplicate { field });
        }

        let record = T::build(T::Id::from(self.next_id), draft)?;
        self.next_id += 1;
        self.records.push(record.clone());
        Ok(record)
    }

    /// First record whose ID equals `id`, if any.
    #[must_use]
    pub fn find(&self, id: T::Id) -> Option<T> {
        self.records.iter().find(|r| r.id() == id).cloned()
    }

    /// Shallow-merge `patch` into the record with `id` and return the
    /// updated record, or `None` if no record matches.
    pub fn update(&mut self, id: T::Id, patch: T::Patch) -> Option<T> {
        let record = self.records.iter_mut().find(|r| r.id() == id)?;
        record.apply(patch);
        Some(record.clone())
    }

    /// Remove the record with `id`. Returns `true` if a record was removed.
    pub fn remove(&mut self, id: T::Id) -> bool {
        let before = self.records.len();
        self.records.retain(|r| r.id() != id);
        self.records.len() < before
    }
}
