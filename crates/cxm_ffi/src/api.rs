//! FFI use-case API for dashboard-facing calls.
//!
//! # Responsibility
//! - Expose stable, use-case-level functions to the UI runtime via FRB.
//! - Own the process-wide dashboard session behind a lock.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - Record identifiers cross the boundary as UTF-8 uuid strings.
//! - Image fields carry opaque strings; file reading stays in the UI.

use cxm_core::{
    analytics, core_version as core_version_inner, init_logging as init_logging_inner,
    ping as ping_inner, Behaviors, BehaviorsPatch, CustomerJourney, DashboardSession,
    Demographics, DemographicsPatch, JourneyDraft, JourneyStep, JourneyStepDraft, Persona,
    PersonaDraft, PersonaPatch, Preferences, PreferencesPatch, StepMetrics,
};
use log::warn;
use std::sync::{Mutex, MutexGuard, OnceLock};
use uuid::Uuid;

static SESSION: OnceLock<Mutex<DashboardSession>> = OnceLock::new();

fn session() -> MutexGuard<'static, DashboardSession> {
    let lock = SESSION.get_or_init(|| Mutex::new(DashboardSession::with_sample_data()));
    match lock.lock() {
        Ok(guard) => guard,
        // A panicked UI callback must not brick the dashboard; the session
        // data itself is still structurally sound.
        Err(poisoned) => poisoned.into_inner(),
    }
}

/// Minimal health-check API for bridge smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking, UI-thread safe.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
///
/// # FFI contract
/// - Sync call, non-blocking, UI-thread safe.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// # FFI contract
/// - Sync call; may create the log directory.
/// - Idempotent for the same `level + log_dir`; conflicting reconfiguration
///   attempts return an error message.
/// - Never panics; returns empty string on success.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Discards the current session and starts a fresh one.
///
/// # FFI contract
/// - Sync call; `seed_samples` restores the out-of-the-box demo catalog.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn dashboard_reset(seed_samples: bool) {
    *session() = if seed_samples {
        DashboardSession::with_sample_data()
    } else {
        DashboardSession::new()
    };
}

/// Generic action response envelope for create/update flows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordActionResponse {
    /// Whether the operation succeeded.
    pub ok: bool,
    /// Stable record ID on success.
    pub record_id: Option<String>,
    /// Human-readable response message for diagnostics/UI.
    pub message: String,
}

impl RecordActionResponse {
    fn success(message: impl Into<String>, record_id: String) -> Self {
        Self {
            ok: true,
            record_id: Some(record_id),
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            record_id: None,
            message: message.into(),
        }
    }
}

/// Flat persona form payload, one field per form input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersonaFormData {
    pub name: String,
    pub avatar: Option<String>,
    pub age_range: String,
    pub income: String,
    pub location: String,
    pub occupation: String,
    pub brands: Vec<String>,
    pub categories: Vec<String>,
    pub price_range: String,
    pub shopping_frequency: String,
    pub purchase_drivers: Vec<String>,
    pub channel_preferences: Vec<String>,
    pub loyalty_status: String,
}

/// Sparse persona edit payload; `None` fields keep their stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersonaEditData {
    pub name: Option<String>,
    pub avatar: Option<String>,
    pub age_range: Option<String>,
    pub income: Option<String>,
    pub location: Option<String>,
    pub occupation: Option<String>,
    pub brands: Option<Vec<String>>,
    pub categories: Option<Vec<String>>,
    pub price_range: Option<String>,
    pub shopping_frequency: Option<String>,
    pub purchase_drivers: Option<Vec<String>>,
    pub channel_preferences: Option<Vec<String>>,
    pub loyalty_status: Option<String>,
}

/// Persona summary row for the dashboard list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonaListItem {
    pub persona_id: String,
    pub name: String,
    pub occupation: String,
    pub loyalty_status: String,
    pub avatar: Option<String>,
}

/// Search response envelope for the persona list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonaListResponse {
    pub items: Vec<PersonaListItem>,
    pub message: String,
}

/// Full persona payload for the detail view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonaData {
    pub persona_id: String,
    pub name: String,
    pub avatar: Option<String>,
    pub age_range: String,
    pub income: String,
    pub location: String,
    pub occupation: String,
    pub brands: Vec<String>,
    pub categories: Vec<String>,
    pub price_range: String,
    pub shopping_frequency: String,
    pub purchase_drivers: Vec<String>,
    pub channel_preferences: Vec<String>,
    pub loyalty_status: String,
}

/// Detail response with an explicit not-found state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonaDetailResponse {
    pub found: bool,
    pub persona: Option<PersonaData>,
    pub message: String,
}

/// Creates a persona from the dashboard form.
///
/// # FFI contract
/// - Sync call against the in-memory session.
/// - Never panics; returns the new record ID on success.
#[flutter_rust_bridge::frb(sync)]
pub fn persona_create(form: PersonaFormData) -> RecordActionResponse {
    let draft = draft_from_persona_form(form);
    match session().personas.create_persona(draft) {
        Ok(persona) => RecordActionResponse::success("Persona created.", persona.id.to_string()),
        Err(err) => RecordActionResponse::failure(format!("persona_create failed: {err}")),
    }
}

/// Applies a sparse edit to an existing persona.
///
/// # FFI contract
/// - Sync call; fields left `None` keep their stored value, including the
///   untouched fields of a partially edited attribute group.
/// - Never panics; unknown or malformed IDs return a failure envelope.
#[flutter_rust_bridge::frb(sync)]
pub fn persona_update(persona_id: String, edit: PersonaEditData) -> RecordActionResponse {
    let Some(id) = parse_record_id(&persona_id, "persona") else {
        return RecordActionResponse::failure(format!("invalid persona id: `{persona_id}`"));
    };
    let patch = patch_from_persona_edit(edit);
    match session().personas.update_persona(id, &patch) {
        Ok(persona) => RecordActionResponse::success("Persona updated.", persona.id.to_string()),
        Err(err) => RecordActionResponse::failure(format!("persona_update failed: {err}")),
    }
}

/// Searches personas by name for the dashboard list.
///
/// # FFI contract
/// - Sync call; an empty query lists the whole store in insertion order.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn persona_search(query: String) -> PersonaListResponse {
    let items = session()
        .personas
        .filter_personas(query.as_str())
        .into_iter()
        .map(persona_list_item)
        .collect::<Vec<_>>();
    let message = if items.is_empty() {
        "No personas match.".to_string()
    } else {
        format!("Found {} persona(s).", items.len())
    };
    PersonaListResponse { items, message }
}

/// Loads one persona for the detail view.
///
/// # FFI contract
/// - Sync call; a missing record is a `found=false` state, not an error.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn persona_detail(persona_id: String) -> PersonaDetailResponse {
    let Some(id) = parse_record_id(&persona_id, "persona") else {
        return PersonaDetailResponse {
            found: false,
            persona: None,
            message: format!("invalid persona id: `{persona_id}`"),
        };
    };
    match session().personas.get_persona(id) {
        Some(persona) => PersonaDetailResponse {
            found: true,
            persona: Some(persona_data(persona)),
            message: String::new(),
        },
        None => PersonaDetailResponse {
            found: false,
            persona: None,
            message: "Persona not found.".to_string(),
        },
    }
}

/// One committed step inside a journey or journey draft.
#[derive(Debug, Clone, PartialEq)]
pub struct JourneyStepData {
    pub step_id: String,
    pub title: String,
    pub description: String,
    pub touchpoint: String,
    pub image: Option<String>,
    pub satisfaction: f64,
    pub engagement: f64,
    pub conversion: f64,
}

/// Step input from the journey form, before an ID exists.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JourneyStepInput {
    pub title: String,
    pub description: String,
    pub touchpoint: String,
    pub image: Option<String>,
    pub satisfaction: f64,
    pub engagement: f64,
    pub conversion: f64,
}

/// Journey under assembly on the form side.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JourneyDraftData {
    pub name: Option<String>,
    pub brand: Option<String>,
    pub persona: Option<String>,
    pub cover_image: Option<String>,
    pub steps: Vec<JourneyStepData>,
}

/// Draft response envelope: the draft to keep editing with, plus outcome.
#[derive(Debug, Clone, PartialEq)]
pub struct JourneyDraftResponse {
    pub ok: bool,
    pub draft: JourneyDraftData,
    pub message: String,
}

/// Journey summary row for the dashboard list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JourneyListItem {
    pub journey_id: String,
    pub name: String,
    pub brand: String,
    pub persona: String,
    pub step_count: u32,
    pub created_at: String,
}

/// Search response envelope for the journey list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JourneyListResponse {
    pub items: Vec<JourneyListItem>,
    pub message: String,
}

/// Full journey payload for the timeline/detail view.
#[derive(Debug, Clone, PartialEq)]
pub struct JourneyData {
    pub journey_id: String,
    pub name: String,
    pub brand: String,
    pub persona: String,
    pub cover_image: Option<String>,
    pub steps: Vec<JourneyStepData>,
    pub created_at: String,
    pub updated_at: String,
}

/// Detail response with an explicit not-found state.
#[derive(Debug, Clone, PartialEq)]
pub struct JourneyDetailResponse {
    pub found: bool,
    pub journey: Option<JourneyData>,
    pub message: String,
}

/// Validates and appends one step to a journey draft.
///
/// # FFI contract
/// - Sync call; pure draft transformation, the session is not touched.
/// - Blank title or description returns `ok=false` with the draft
///   unchanged, so the form can surface the validation message.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn journey_add_step(draft: JourneyDraftData, step: JourneyStepInput) -> JourneyDraftResponse {
    let mut core_draft = match draft_to_core(&draft) {
        Ok(value) => value,
        Err(message) => {
            return JourneyDraftResponse {
                ok: false,
                draft,
                message,
            };
        }
    };

    match core_draft.add_step(step_draft_from_input(step)) {
        Ok(_) => JourneyDraftResponse {
            ok: true,
            draft: draft_from_core(&core_draft),
            message: "Step added.".to_string(),
        },
        Err(err) => JourneyDraftResponse {
            ok: false,
            draft,
            message: format!("journey_add_step rejected: {err}"),
        },
    }
}

/// Commits an assembled journey draft to the session.
///
/// # FFI contract
/// - Sync call; stamps creation timestamps and freezes step order.
/// - Never panics; returns the new record ID on success.
#[flutter_rust_bridge::frb(sync)]
pub fn journey_create(draft: JourneyDraftData) -> RecordActionResponse {
    let core_draft = match draft_to_core(&draft) {
        Ok(value) => value,
        Err(message) => return RecordActionResponse::failure(message),
    };
    match session().journeys.create_journey(core_draft) {
        Ok(journey) => RecordActionResponse::success("Journey created.", journey.id.to_string()),
        Err(err) => RecordActionResponse::failure(format!("journey_create failed: {err}")),
    }
}

/// Searches journeys by name for the dashboard list.
///
/// # FFI contract
/// - Sync call; an empty query lists the whole store in insertion order.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn journey_search(query: String) -> JourneyListResponse {
    let items = session()
        .journeys
        .filter_journeys(query.as_str())
        .into_iter()
        .map(journey_list_item)
        .collect::<Vec<_>>();
    let message = if items.is_empty() {
        "No journeys match.".to_string()
    } else {
        format!("Found {} journey(s).", items.len())
    };
    JourneyListResponse { items, message }
}

/// Loads one journey for the timeline/detail view.
///
/// # FFI contract
/// - Sync call; a missing record is a `found=false` state, not an error.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn journey_detail(journey_id: String) -> JourneyDetailResponse {
    let Some(id) = parse_record_id(&journey_id, "journey") else {
        return JourneyDetailResponse {
            found: false,
            journey: None,
            message: format!("invalid journey id: `{journey_id}`"),
        };
    };
    match session().journeys.get_journey(id) {
        Some(journey) => JourneyDetailResponse {
            found: true,
            journey: Some(journey_data(journey)),
            message: String::new(),
        },
        None => JourneyDetailResponse {
            found: false,
            journey: None,
            message: "Journey not found.".to_string(),
        },
    }
}

/// One KPI summary tile.
#[derive(Debug, Clone, PartialEq)]
pub struct KpiWidgetData {
    pub title: String,
    pub value: String,
    pub change: f64,
}

/// One point of the monthly engagement trend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngagementPointData {
    pub month: String,
    pub engagement: u32,
}

/// Conversion percentage for one sales channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelConversionData {
    pub channel: String,
    pub conversion: u32,
}

/// KPI tiles for the dashboard header row.
///
/// # FFI contract
/// - Sync call over fixed display data; never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn kpi_widgets() -> Vec<KpiWidgetData> {
    analytics::kpi_widgets()
        .into_iter()
        .map(|widget| KpiWidgetData {
            title: widget.title,
            value: widget.value,
            change: widget.change,
        })
        .collect()
}

/// Engagement series for the area chart.
///
/// # FFI contract
/// - Sync call over fixed display data; never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn engagement_trend() -> Vec<EngagementPointData> {
    analytics::engagement_trend()
        .into_iter()
        .map(|point| EngagementPointData {
            month: point.month,
            engagement: point.engagement,
        })
        .collect()
}

/// Conversion series for the bar chart.
///
/// # FFI contract
/// - Sync call over fixed display data; never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn conversion_by_channel() -> Vec<ChannelConversionData> {
    analytics::conversion_by_channel()
        .into_iter()
        .map(|entry| ChannelConversionData {
            channel: entry.channel,
            conversion: entry.conversion,
        })
        .collect()
}

fn parse_record_id(value: &str, kind: &str) -> Option<Uuid> {
    match Uuid::parse_str(value.trim()) {
        Ok(id) => Some(id),
        Err(_) => {
            warn!("event=id_parse_failed module=ffi status=rejected kind={kind}");
            None
        }
    }
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

fn draft_from_persona_form(form: PersonaFormData) -> PersonaDraft {
    PersonaDraft {
        name: Some(form.name),
        avatar: form.avatar.and_then(non_empty),
        demographics: Some(Demographics {
            age_range: form.age_range,
            income: form.income,
            location: form.location,
            occupation: form.occupation,
        }),
        preferences: Some(Preferences {
            brands: form.brands,
            categories: form.categories,
            price_range: form.price_range,
            shopping_frequency: form.shopping_frequency,
        }),
        behaviors: Some(Behaviors {
            purchase_drivers: form.purchase_drivers,
            channel_preferences: form.channel_preferences,
            loyalty_status: form.loyalty_status,
        }),
    }
}

fn patch_from_persona_edit(edit: PersonaEditData) -> PersonaPatch {
    PersonaPatch {
        name: edit.name,
        avatar: edit.avatar,
        demographics: Some(DemographicsPatch {
            age_range: edit.age_range,
            income: edit.income,
            location: edit.location,
            occupation: edit.occupation,
        }),
        preferences: Some(PreferencesPatch {
            brands: edit.brands,
            categories: edit.categories,
            price_range: edit.price_range,
            shopping_frequency: edit.shopping_frequency,
        }),
        behaviors: Some(BehaviorsPatch {
            purchase_drivers: edit.purchase_drivers,
            channel_preferences: edit.channel_preferences,
            loyalty_status: edit.loyalty_status,
        }),
    }
}

fn persona_list_item(persona: Persona) -> PersonaListItem {
    PersonaListItem {
        persona_id: persona.id.to_string(),
        name: persona.name,
        occupation: persona.demographics.occupation,
        loyalty_status: persona.behaviors.loyalty_status,
        avatar: persona.avatar,
    }
}

fn persona_data(persona: Persona) -> PersonaData {
    PersonaData {
        persona_id: persona.id.to_string(),
        name: persona.name,
        avatar: persona.avatar,
        age_range: persona.demographics.age_range,
        income: persona.demographics.income,
        location: persona.demographics.location,
        occupation: persona.demographics.occupation,
        brands: persona.preferences.brands,
        categories: persona.preferences.categories,
        price_range: persona.preferences.price_range,
        shopping_frequency: persona.preferences.shopping_frequency,
        purchase_drivers: persona.behaviors.purchase_drivers,
        channel_preferences: persona.behaviors.channel_preferences,
        loyalty_status: persona.behaviors.loyalty_status,
    }
}

fn step_draft_from_input(step: JourneyStepInput) -> JourneyStepDraft {
    JourneyStepDraft {
        title: step.title,
        description: step.description,
        touchpoint: step.touchpoint,
        image: step.image.and_then(non_empty),
        metrics: StepMetrics {
            satisfaction: step.satisfaction,
            engagement: step.engagement,
            conversion: step.conversion,
        },
    }
}

fn step_data(step: &JourneyStep) -> JourneyStepData {
    JourneyStepData {
        step_id: step.id.to_string(),
        title: step.title.clone(),
        description: step.description.clone(),
        touchpoint: step.touchpoint.clone(),
        image: step.image.clone(),
        satisfaction: step.metrics.satisfaction,
        engagement: step.metrics.engagement,
        conversion: step.metrics.conversion,
    }
}

fn draft_to_core(draft: &JourneyDraftData) -> Result<JourneyDraft, String> {
    let mut steps = Vec::with_capacity(draft.steps.len());
    for step in &draft.steps {
        let Some(id) = parse_record_id(&step.step_id, "step") else {
            return Err(format!("invalid step id: `{}`", step.step_id));
        };
        steps.push(JourneyStep {
            id,
            title: step.title.clone(),
            description: step.description.clone(),
            touchpoint: step.touchpoint.clone(),
            image: step.image.clone(),
            metrics: StepMetrics {
                satisfaction: step.satisfaction,
                engagement: step.engagement,
                conversion: step.conversion,
            },
        });
    }

    Ok(JourneyDraft {
        name: draft.name.clone(),
        brand: draft.brand.clone(),
        persona: draft.persona.clone(),
        cover_image: draft.cover_image.clone(),
        steps,
    })
}

fn draft_from_core(draft: &JourneyDraft) -> JourneyDraftData {
    JourneyDraftData {
        name: draft.name.clone(),
        brand: draft.brand.clone(),
        persona: draft.persona.clone(),
        cover_image: draft.cover_image.clone(),
        steps: draft.steps.iter().map(step_data).collect(),
    }
}

fn journey_list_item(journey: CustomerJourney) -> JourneyListItem {
    JourneyListItem {
        journey_id: journey.id.to_string(),
        name: journey.name,
        brand: journey.brand,
        persona: journey.persona,
        step_count: journey.steps.len() as u32,
        created_at: journey.created_at.to_rfc3339(),
    }
}

fn journey_data(journey: CustomerJourney) -> JourneyData {
    JourneyData {
        journey_id: journey.id.to_string(),
        name: journey.name,
        brand: journey.brand,
        persona: journey.persona,
        cover_image: journey.cover_image,
        steps: journey.steps.iter().map(step_data).collect(),
        created_at: journey.created_at.to_rfc3339(),
        updated_at: journey.updated_at.to_rfc3339(),
    }
}

#[cfg(test)]
mod tests {
    use super::{
        core_version, init_logging, journey_add_step, journey_create, journey_detail,
        journey_search, kpi_widgets, persona_create, persona_detail, persona_search,
        persona_update, ping, JourneyDraftData, JourneyStepInput, PersonaEditData, PersonaFormData,
    };
    use std::time::{SystemTime, UNIX_EPOCH};

    fn unique_token(prefix: &str) -> String {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("time went backwards")
            .as_nanos();
        format!("{prefix}-{nanos}")
    }

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }

    #[test]
    fn init_logging_rejects_empty_log_dir() {
        let error = init_logging("info".to_string(), String::new());
        assert!(!error.is_empty());
    }

    #[test]
    fn init_logging_rejects_unsupported_level() {
        let error = init_logging("chatty".to_string(), "/tmp/cxm-logs".to_string());
        assert!(!error.is_empty());
    }

    #[test]
    fn created_persona_is_found_by_search() {
        let token = unique_token("persona-search");
        let created = persona_create(PersonaFormData {
            name: format!("Persona {token}"),
            occupation: "Marketing Manager".to_string(),
            ..PersonaFormData::default()
        });
        assert!(created.ok, "{}", created.message);
        let created_id = created.record_id.clone().expect("create returns id");

        let response = persona_search(token);
        assert_eq!(response.items.len(), 1);
        assert_eq!(response.items[0].persona_id, created_id);
        assert_eq!(response.items[0].occupation, "Marketing Manager");
    }

    #[test]
    fn persona_update_keeps_untouched_group_fields() {
        let token = unique_token("persona-update");
        let created = persona_create(PersonaFormData {
            name: format!("Persona {token}"),
            age_range: "28-35".to_string(),
            income: "$75,000".to_string(),
            location: "Metropolitan Area".to_string(),
            ..PersonaFormData::default()
        });
        let persona_id = created.record_id.expect("create returns id");

        let updated = persona_update(
            persona_id.clone(),
            PersonaEditData {
                income: Some("$90,000".to_string()),
                ..PersonaEditData::default()
            },
        );
        assert!(updated.ok, "{}", updated.message);

        let detail = persona_detail(persona_id);
        assert!(detail.found);
        let persona = detail.persona.expect("detail returns persona");
        assert_eq!(persona.income, "$90,000");
        assert_eq!(persona.age_range, "28-35");
        assert_eq!(persona.location, "Metropolitan Area");
    }

    #[test]
    fn persona_update_rejects_malformed_id() {
        let response = persona_update("not-a-uuid".to_string(), PersonaEditData::default());
        assert!(!response.ok);
        assert!(response.message.contains("invalid persona id"));
    }

    #[test]
    fn persona_detail_reports_not_found_without_error() {
        let response = persona_detail("00000000-0000-4000-8000-00000000dead".to_string());
        assert!(!response.found);
        assert!(response.persona.is_none());
        assert!(!response.message.is_empty());
    }

    #[test]
    fn add_step_round_trips_the_draft_and_rejects_blank_titles() {
        let draft = JourneyDraftData {
            name: Some(unique_token("journey-draft")),
            ..JourneyDraftData::default()
        };

        let rejected = journey_add_step(
            draft.clone(),
            JourneyStepInput {
                title: String::new(),
                description: "described".to_string(),
                ..JourneyStepInput::default()
            },
        );
        assert!(!rejected.ok);
        assert!(rejected.draft.steps.is_empty());
        assert!(rejected.message.contains("title"));

        let accepted = journey_add_step(
            rejected.draft,
            JourneyStepInput {
                title: "Research".to_string(),
                description: "Customer compares options".to_string(),
                touchpoint: "Mobile App".to_string(),
                satisfaction: 85.0,
                ..JourneyStepInput::default()
            },
        );
        assert!(accepted.ok, "{}", accepted.message);
        assert_eq!(accepted.draft.steps.len(), 1);
        assert!(!accepted.draft.steps[0].step_id.is_empty());
        assert_eq!(accepted.draft.steps[0].title, "Research");
    }

    #[test]
    fn journey_assembles_commits_and_reads_back_in_order() {
        let token = unique_token("journey-commit");
        let mut response = journey_add_step(
            JourneyDraftData {
                name: Some(format!("Journey {token}")),
                brand: Some("Modern Home".to_string()),
                ..JourneyDraftData::default()
            },
            JourneyStepInput {
                title: "Research".to_string(),
                description: "Customer compares options".to_string(),
                ..JourneyStepInput::default()
            },
        );
        assert!(response.ok, "{}", response.message);
        response = journey_add_step(
            response.draft,
            JourneyStepInput {
                title: "Purchase".to_string(),
                description: "Customer checks out".to_string(),
                ..JourneyStepInput::default()
            },
        );
        assert!(response.ok, "{}", response.message);

        let created = journey_create(response.draft);
        assert!(created.ok, "{}", created.message);
        let journey_id = created.record_id.expect("create returns id");

        let listed = journey_search(token);
        assert_eq!(listed.items.len(), 1);
        assert_eq!(listed.items[0].journey_id, journey_id);
        assert_eq!(listed.items[0].step_count, 2);

        let detail = journey_detail(journey_id);
        assert!(detail.found);
        let journey = detail.journey.expect("detail returns journey");
        assert_eq!(journey.steps[0].title, "Research");
        assert_eq!(journey.steps[1].title, "Purchase");
        assert_eq!(journey.created_at, journey.updated_at);
    }

    #[test]
    fn kpi_row_serves_four_tiles() {
        let widgets = kpi_widgets();
        assert_eq!(widgets.len(), 4);
        assert_eq!(widgets[0].title, "Total Customers");
        assert!(widgets[2].change < 0.0);
    }
}
