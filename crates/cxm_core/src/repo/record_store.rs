//! Generic in-memory record store.
//!
//! # Responsibility
//! - Hold committed records of one type in insertion order.
//! - Provide append, replace-by-identity, lookup and name filtering.
//!
//! # Invariants
//! - `insert` grows the store by exactly one element and never overwrites.
//! - `replace` swaps the record in its original slot, so iteration order
//!   is stable across edits.
//! - No operation removes a record; the session has no destroy path.

use crate::model::journey::CustomerJourney;
use crate::model::persona::Persona;
use crate::search::name_filter::NameFilter;
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

pub type StoreResult<T> = Result<T, StoreError>;

/// Collection-level error for store mutations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// An insert collided with an already-stored ID.
    DuplicateId(Uuid),
    /// A replace targeted an ID the store has never seen.
    NotFound(Uuid),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateId(id) => write!(f, "record id already stored: {id}"),
            Self::NotFound(id) => write!(f, "record not found: {id}"),
        }
    }
}

impl Error for StoreError {}

/// Contract a record type fulfills to live in a [`MemoryStore`].
pub trait StoredRecord {
    /// Stable identity the store keys replacement and lookup on.
    fn record_id(&self) -> Uuid;
    /// Name the store matches search queries against.
    fn display_name(&self) -> &str;
}

impl StoredRecord for Persona {
    fn record_id(&self) -> Uuid {
        self.id
    }

    fn display_name(&self) -> &str {
        &self.name
    }
}

impl StoredRecord for CustomerJourney {
    fn record_id(&self) -> Uuid {
        self.id
    }

    fn display_name(&self) -> &str {
        &self.name
    }
}

/// Insertion-ordered in-memory collection of one record type.
///
/// Behaves as a mapping from ID to the latest record version while staying
/// append-ordered for iteration. Single-writer by construction: the owning
/// session mutates it from UI callbacks only.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore<R: StoredRecord> {
    records: Vec<R>,
}

impl<R: StoredRecord> MemoryStore<R> {
    /// Creates an empty store for session start.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Appends one committed record and returns its ID.
    ///
    /// # Errors
    /// - [`StoreError::DuplicateId`] when the ID is already stored; the
    ///   store is left unchanged.
    pub fn insert(&mut self, record: R) -> StoreResult<Uuid> {
        let id = record.record_id();
        if self.position(id).is_some() {
            return Err(StoreError::DuplicateId(id));
        }
        self.records.push(record);
        Ok(id)
    }

    /// Replaces the stored record carrying the same ID, keeping its slot.
    ///
    /// # Errors
    /// - [`StoreError::NotFound`] when no record carries that ID.
    pub fn replace(&mut self, record: R) -> StoreResult<()> {
        let id = record.record_id();
        match self.position(id) {
            Some(index) => {
                self.records[index] = record;
                Ok(())
            }
            None => Err(StoreError::NotFound(id)),
        }
    }

    /// Looks up one record by ID; absence is a `None` state, not an error.
    pub fn get(&self, id: Uuid) -> Option<&R> {
        self.position(id).map(|index| &self.records[index])
    }

    /// Full insertion-ordered view of the store.
    pub fn records(&self) -> &[R] {
        &self.records
    }

    /// Returns the insertion-ordered subsequence whose names match `query`
    /// case-insensitively; an empty query matches every record.
    pub fn filter_by_name(&self, query: &str) -> Vec<&R> {
        let filter = NameFilter::new(query);
        self.records
            .iter()
            .filter(|record| filter.matches(record.display_name()))
            .collect()
    }

    fn position(&self, id: Uuid) -> Option<usize> {
        self.records
            .iter()
            .position(|record| record.record_id() == id)
    }
}
