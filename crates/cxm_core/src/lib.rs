//! Core domain logic for the RetailCXM dashboard.
//! This crate is the single source of truth for record identity, ordering
//! and merge semantics; rendering lives entirely in the UI layer.

pub mod analytics;
pub mod logging;
pub mod model;
pub mod repo;
pub mod sample;
pub mod search;
pub mod service;
pub mod session;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::journey::{
    CustomerJourney, JourneyDraft, JourneyId, JourneyStep, JourneyStepDraft, StepId, StepMetrics,
    StepValidationError,
};
pub use model::persona::{
    Behaviors, BehaviorsPatch, Demographics, DemographicsPatch, Persona, PersonaDraft, PersonaId,
    PersonaPatch, Preferences, PreferencesPatch,
};
pub use repo::record_store::{MemoryStore, StoreError, StoreResult, StoredRecord};
pub use search::name_filter::NameFilter;
pub use service::journey_service::{JourneyService, JourneyServiceError};
pub use service::persona_service::{merge_persona_edit, PersonaService, PersonaServiceError};
pub use session::DashboardSession;

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
