//! Journey use-case service.
//!
//! # Responsibility
//! - Commit assembled journey drafts and serve journey lookups.
//!
//! # Invariants
//! - A commit stamps `created_at` and `updated_at` from one instant.
//! - Step order from the draft survives the commit unchanged.

use crate::model::journey::{CustomerJourney, JourneyDraft, JourneyId};
use crate::repo::record_store::{MemoryStore, StoreError, StoreResult};
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Service error for journey use-cases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JourneyServiceError {
    /// Target journey does not exist.
    JourneyNotFound(JourneyId),
    /// Collection-level failure.
    Store(StoreError),
}

impl Display for JourneyServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::JourneyNotFound(id) => write!(f, "journey not found: {id}"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for JourneyServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
            Self::JourneyNotFound(_) => None,
        }
    }
}

impl From<StoreError> for JourneyServiceError {
    fn from(value: StoreError) -> Self {
        match value {
            StoreError::NotFound(id) => Self::JourneyNotFound(id),
            other => Self::Store(other),
        }
    }
}

/// Journey facade over the session's in-memory store.
pub struct JourneyService {
    store: MemoryStore<CustomerJourney>,
}

impl Default for JourneyService {
    fn default() -> Self {
        Self::new()
    }
}

impl JourneyService {
    /// Creates a service over an empty store for session start.
    pub fn new() -> Self {
        Self {
            store: MemoryStore::new(),
        }
    }

    /// Creates a service pre-populated with committed records.
    pub fn with_records(records: Vec<CustomerJourney>) -> StoreResult<Self> {
        let mut service = Self::new();
        for record in records {
            service.store.insert(record)?;
        }
        Ok(service)
    }

    /// Freezes an assembled draft into a stored journey and returns it.
    ///
    /// # Contract
    /// - Assigns a fresh random ID.
    /// - `created_at == updated_at`, stamped at commit time.
    /// - The draft's step sequence is preserved verbatim.
    pub fn create_journey(
        &mut self,
        draft: JourneyDraft,
    ) -> Result<CustomerJourney, JourneyServiceError> {
        let journey = CustomerJourney::from_draft(draft);
        let id = self.store.insert(journey.clone())?;
        info!(
            "event=journey_created module=core status=ok journey_id={id} steps={}",
            journey.steps.len()
        );
        Ok(journey)
    }

    /// Gets one journey by ID; absence backs the detail-view "not found"
    /// state.
    pub fn get_journey(&self, id: JourneyId) -> Option<CustomerJourney> {
        self.store.get(id).cloned()
    }

    /// All journeys in insertion order.
    pub fn list_journeys(&self) -> Vec<CustomerJourney> {
        self.store.records().to_vec()
    }

    /// Journeys whose name matches the search box query.
    pub fn filter_journeys(&self, query: &str) -> Vec<CustomerJourney> {
        self.store
            .filter_by_name(query)
            .into_iter()
            .cloned()
            .collect()
    }

    pub fn journey_count(&self) -> usize {
        self.store.len()
    }
}
