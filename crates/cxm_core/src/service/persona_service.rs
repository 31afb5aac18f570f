//! Persona use-case service.
//!
//! # Responsibility
//! - Provide persona create/edit/get/list/filter entry points.
//! - Own the partial-edit merge rule for nested attribute groups.
//!
//! # Invariants
//! - Created records are appended; edits replace by identity, never in
//!   place.
//! - Merging a patch that touches one nested field leaves sibling fields
//!   of that group untouched.

use crate::model::persona::{
    Behaviors, BehaviorsPatch, Demographics, DemographicsPatch, Persona, PersonaDraft, PersonaId,
    PersonaPatch, Preferences, PreferencesPatch,
};
use crate::repo::record_store::{MemoryStore, StoreError, StoreResult};
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Service error for persona use-cases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersonaServiceError {
    /// Target persona does not exist.
    PersonaNotFound(PersonaId),
    /// Collection-level failure.
    Store(StoreError),
}

impl Display for PersonaServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PersonaNotFound(id) => write!(f, "persona not found: {id}"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for PersonaServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
            Self::PersonaNotFound(_) => None,
        }
    }
}

impl From<StoreError> for PersonaServiceError {
    fn from(value: StoreError) -> Self {
        match value {
            StoreError::NotFound(id) => Self::PersonaNotFound(id),
            other => Self::Store(other),
        }
    }
}

/// Persona facade over the session's in-memory store.
pub struct PersonaService {
    store: MemoryStore<Persona>,
}

impl Default for PersonaService {
    fn default() -> Self {
        Self::new()
    }
}

impl PersonaService {
    /// Creates a service over an empty store for session start.
    pub fn new() -> Self {
        Self {
            store: MemoryStore::new(),
        }
    }

    /// Creates a service pre-populated with committed records.
    ///
    /// Used by sample seeding; rejects duplicate IDs in the input.
    pub fn with_records(records: Vec<Persona>) -> StoreResult<Self> {
        let mut service = Self::new();
        for record in records {
            service.store.insert(record)?;
        }
        Ok(service)
    }

    /// Commits a form draft as a new persona and returns the record.
    ///
    /// # Contract
    /// - Assigns a fresh random ID.
    /// - Absent draft fields commit as schema defaults.
    /// - The store grows by exactly one record.
    pub fn create_persona(&mut self, draft: PersonaDraft) -> Result<Persona, PersonaServiceError> {
        let persona = Persona::from_draft(draft);
        let id = self.store.insert(persona.clone())?;
        info!("event=persona_created module=core status=ok persona_id={id}");
        Ok(persona)
    }

    /// Applies a sparse edit to an existing persona.
    ///
    /// Builds the merged record and replaces the stored one by identity,
    /// keeping its position in the list.
    pub fn update_persona(
        &mut self,
        id: PersonaId,
        patch: &PersonaPatch,
    ) -> Result<Persona, PersonaServiceError> {
        let existing = self
            .store
            .get(id)
            .ok_or(PersonaServiceError::PersonaNotFound(id))?;
        let merged = merge_persona_edit(existing, patch);
        self.store.replace(merged.clone())?;
        info!("event=persona_updated module=core status=ok persona_id={id}");
        Ok(merged)
    }

    /// Gets one persona by ID; absence backs the detail-view "not found"
    /// state.
    pub fn get_persona(&self, id: PersonaId) -> Option<Persona> {
        self.store.get(id).cloned()
    }

    /// All personas in insertion order.
    pub fn list_personas(&self) -> Vec<Persona> {
        self.store.records().to_vec()
    }

    /// Personas whose name matches the search box query.
    pub fn filter_personas(&self, query: &str) -> Vec<Persona> {
        self.store
            .filter_by_name(query)
            .into_iter()
            .cloned()
            .collect()
    }

    pub fn persona_count(&self) -> usize {
        self.store.len()
    }
}

/// Produces the record an edit commits: top-level scalars overwrite, the
/// three nested groups merge field-by-field.
///
/// Wholesale replacement of a nested group would silently erase the
/// sibling fields the form never showed, so each group patch reconciles
/// against the existing group one field at a time. List-valued fields
/// replace as whole units.
pub fn merge_persona_edit(existing: &Persona, patch: &PersonaPatch) -> Persona {
    Persona {
        id: existing.id,
        name: patch.name.clone().unwrap_or_else(|| existing.name.clone()),
        avatar: patch.avatar.clone().or_else(|| existing.avatar.clone()),
        demographics: merge_demographics(&existing.demographics, patch.demographics.as_ref()),
        preferences: merge_preferences(&existing.preferences, patch.preferences.as_ref()),
        behaviors: merge_behaviors(&existing.behaviors, patch.behaviors.as_ref()),
    }
}

fn merge_demographics(existing: &Demographics, patch: Option<&DemographicsPatch>) -> Demographics {
    let Some(patch) = patch else {
        return existing.clone();
    };
    Demographics {
        age_range: pick(&patch.age_range, &existing.age_range),
        income: pick(&patch.income, &existing.income),
        location: pick(&patch.location, &existing.location),
        occupation: pick(&patch.occupation, &existing.occupation),
    }
}

fn merge_preferences(existing: &Preferences, patch: Option<&PreferencesPatch>) -> Preferences {
    let Some(patch) = patch else {
        return existing.clone();
    };
    Preferences {
        brands: pick(&patch.brands, &existing.brands),
        categories: pick(&patch.categories, &existing.categories),
        price_range: pick(&patch.price_range, &existing.price_range),
        shopping_frequency: pick(&patch.shopping_frequency, &existing.shopping_frequency),
    }
}

fn merge_behaviors(existing: &Behaviors, patch: Option<&BehaviorsPatch>) -> Behaviors {
    let Some(patch) = patch else {
        return existing.clone();
    };
    Behaviors {
        purchase_drivers: pick(&patch.purchase_drivers, &existing.purchase_drivers),
        channel_preferences: pick(&patch.channel_preferences, &existing.channel_preferences),
        loyalty_status: pick(&patch.loyalty_status, &existing.loyalty_status),
    }
}

fn pick<T: Clone>(patched: &Option<T>, existing: &T) -> T {
    patched.clone().unwrap_or_else(|| existing.clone())
}
