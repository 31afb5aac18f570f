//! Customer journey domain model.
//!
//! # Responsibility
//! - Define the journey record, its ordered touchpoint steps and metrics.
//! - Own draft accumulation: steps are appended to a mutable draft, then a
//!   single commit freezes the draft into a stored record.
//!
//! # Invariants
//! - Step order inside a journey is append order and is preserved on read.
//! - `created_at == updated_at` at commit; no later path revises either.
//! - A step never enters a draft with a blank title or description.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for a journey record.
pub type JourneyId = Uuid;

/// Identifier for a step, unique within its parent journey.
pub type StepId = Uuid;

/// Per-step outcome metrics, nominally in `0..=100`.
///
/// Values are display data supplied by the caller and are not validated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StepMetrics {
    pub satisfaction: f64,
    pub engagement: f64,
    pub conversion: f64,
}

/// One touchpoint interaction along a journey.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JourneyStep {
    pub id: StepId,
    pub title: String,
    pub description: String,
    /// Channel/context label, e.g. "Mobile App" or "Physical Store".
    pub touchpoint: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub metrics: StepMetrics,
}

/// Canonical journey record: an ordered touchpoint sequence for one brand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerJourney {
    pub id: JourneyId,
    pub name: String,
    pub brand: String,
    /// Denormalized persona display label; intentionally not a foreign key,
    /// so no referential integrity is enforced against persona records.
    pub persona: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<String>,
    pub steps: Vec<JourneyStep>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Sparse step input collected by the journey form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JourneyStepDraft {
    pub title: String,
    pub description: String,
    pub touchpoint: String,
    pub image: Option<String>,
    pub metrics: StepMetrics,
}

/// Step input rejected before it reaches the draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepValidationError {
    BlankTitle,
    BlankDescription,
}

impl Display for StepValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankTitle => write!(f, "step title must not be blank"),
            Self::BlankDescription => write!(f, "step description must not be blank"),
        }
    }
}

impl Error for StepValidationError {}

/// Mutable journey under assembly, before the single commit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JourneyDraft {
    pub name: Option<String>,
    pub brand: Option<String>,
    pub persona: Option<String>,
    pub cover_image: Option<String>,
    pub steps: Vec<JourneyStep>,
}

impl JourneyDraft {
    /// Validates and appends one step to the end of the draft sequence.
    ///
    /// # Contract
    /// - Blank (empty or whitespace-only) `title` or `description` is
    ///   rejected with an explicit error and the draft stays untouched.
    /// - On success the step receives a fresh ID, prior step order is
    ///   preserved, and the new step's ID is returned.
    pub fn add_step(&mut self, step: JourneyStepDraft) -> Result<StepId, StepValidationError> {
        if step.title.trim().is_empty() {
            return Err(StepValidationError::BlankTitle);
        }
        if step.description.trim().is_empty() {
            return Err(StepValidationError::BlankDescription);
        }

        let id = Uuid::new_v4();
        self.steps.push(JourneyStep {
            id,
            title: step.title,
            description: step.description,
            touchpoint: step.touchpoint,
            image: step.image,
            metrics: step.metrics,
        });
        Ok(id)
    }
}

impl CustomerJourney {
    /// Commits a draft into a record with a fresh ID and creation stamps.
    ///
    /// # Invariants
    /// - `created_at` and `updated_at` are stamped from the same instant.
    /// - The draft's accumulated steps are frozen in their append order.
    pub fn from_draft(draft: JourneyDraft) -> Self {
        Self::with_id_at(Uuid::new_v4(), draft, Utc::now())
    }

    /// Commits a draft under caller-provided identity and creation instant.
    ///
    /// Used by sample seeding and tests where identity and timestamps are
    /// fixed up front.
    pub fn with_id_at(id: JourneyId, draft: JourneyDraft, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name: draft.name.unwrap_or_default(),
            brand: draft.brand.unwrap_or_default(),
            persona: draft.persona.unwrap_or_default(),
            cover_image: draft.cover_image,
            steps: draft.steps,
            created_at,
            updated_at: created_at,
        }
    }
}
