//! Persona domain model.
//!
//! # Responsibility
//! - Define the customer-archetype record and its nested attribute groups.
//! - Provide draft and patch shapes for form-driven create/edit flows.
//!
//! # Invariants
//! - `id` is stable and never reused for another persona.
//! - Nested groups are always present on a committed record; absent draft
//!   fields commit as schema defaults, never as missing data.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a persona record.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type PersonaId = Uuid;

/// Free-text demographic attributes of a persona.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Demographics {
    pub age_range: String,
    pub income: String,
    pub location: String,
    pub occupation: String,
}

/// Shopping preference attributes of a persona.
///
/// `brands` and `categories` keep caller-supplied order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    pub brands: Vec<String>,
    pub categories: Vec<String>,
    pub price_range: String,
    pub shopping_frequency: String,
}

/// Observed behavioral attributes of a persona.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Behaviors {
    pub purchase_drivers: Vec<String>,
    pub channel_preferences: Vec<String>,
    pub loyalty_status: String,
}

/// Canonical customer-archetype record.
///
/// `avatar` carries an opaque image reference (URL or inline data-URL);
/// producing that string is the view layer's job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Persona {
    /// Stable record ID used for detail routing and edit-by-identity.
    pub id: PersonaId,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    pub demographics: Demographics,
    pub preferences: Preferences,
    pub behaviors: Behaviors,
}

/// Sparse input shape collected by the persona form.
///
/// Fields left `None` commit as their schema defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonaDraft {
    pub name: Option<String>,
    pub avatar: Option<String>,
    pub demographics: Option<Demographics>,
    pub preferences: Option<Preferences>,
    pub behaviors: Option<Behaviors>,
}

/// Field-level patch for [`Demographics`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DemographicsPatch {
    pub age_range: Option<String>,
    pub income: Option<String>,
    pub location: Option<String>,
    pub occupation: Option<String>,
}

/// Field-level patch for [`Preferences`].
///
/// List-valued fields replace as whole units when present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreferencesPatch {
    pub brands: Option<Vec<String>>,
    pub categories: Option<Vec<String>>,
    pub price_range: Option<String>,
    pub shopping_frequency: Option<String>,
}

/// Field-level patch for [`Behaviors`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BehaviorsPatch {
    pub purchase_drivers: Option<Vec<String>>,
    pub channel_preferences: Option<Vec<String>>,
    pub loyalty_status: Option<String>,
}

/// Sparse edit shape for an existing persona.
///
/// Top-level scalars overwrite; nested group patches merge field-by-field
/// (see `service::persona_service::merge_persona_edit`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonaPatch {
    pub name: Option<String>,
    pub avatar: Option<String>,
    pub demographics: Option<DemographicsPatch>,
    pub preferences: Option<PreferencesPatch>,
    pub behaviors: Option<BehaviorsPatch>,
}

impl Persona {
    /// Commits a draft into a record with a freshly generated ID.
    ///
    /// # Invariants
    /// - Absent draft fields are initialized to schema defaults.
    /// - The generated ID is random (uuid v4), so rapid successive creates
    ///   cannot collide.
    pub fn from_draft(draft: PersonaDraft) -> Self {
        Self::with_id(Uuid::new_v4(), draft)
    }

    /// Commits a draft under a caller-provided stable ID.
    ///
    /// Used by sample seeding and tests where identity is fixed up front.
    pub fn with_id(id: PersonaId, draft: PersonaDraft) -> Self {
        Self {
            id,
            name: draft.name.unwrap_or_default(),
            avatar: draft.avatar,
            demographics: draft.demographics.unwrap_or_default(),
            preferences: draft.preferences.unwrap_or_default(),
            behaviors: draft.behaviors.unwrap_or_default(),
        }
    }
}
