//! Dashboard session state container.
//!
//! # Responsibility
//! - Own the per-session persona and journey stores behind one handle.
//! - Provide the create-empty-on-session-start lifecycle, plus demo
//!   seeding for the out-of-the-box dashboard.
//!
//! # Invariants
//! - Stores live for the session only; nothing is persisted.
//! - Single-writer: callers needing cross-thread access add their own
//!   locking (the FFI boundary wraps the session in a `Mutex`).

use crate::sample;
use crate::service::journey_service::JourneyService;
use crate::service::persona_service::PersonaService;

/// One user's in-memory dashboard state.
pub struct DashboardSession {
    pub personas: PersonaService,
    pub journeys: JourneyService,
}

impl Default for DashboardSession {
    fn default() -> Self {
        Self::new()
    }
}

impl DashboardSession {
    /// Starts a session with empty stores.
    pub fn new() -> Self {
        Self {
            personas: PersonaService::new(),
            journeys: JourneyService::new(),
        }
    }

    /// Starts a session seeded with the demo catalog the dashboard shows
    /// before the user creates anything.
    pub fn with_sample_data() -> Self {
        Self {
            personas: PersonaService::with_records(sample::sample_personas())
                .expect("sample persona ids are unique"),
            journeys: JourneyService::with_records(sample::sample_journeys())
                .expect("sample journey ids are unique"),
        }
    }
}
