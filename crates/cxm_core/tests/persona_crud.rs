use cxm_core::{
    Demographics, DemographicsPatch, PersonaDraft, PersonaPatch, PersonaService,
    PersonaServiceError,
};
use std::collections::HashSet;
use uuid::Uuid;

fn named_draft(name: &str) -> PersonaDraft {
    PersonaDraft {
        name: Some(name.to_string()),
        ..PersonaDraft::default()
    }
}

#[test]
fn create_assigns_identity_and_appends() {
    let mut service = PersonaService::new();

    let created = service.create_persona(named_draft("Urban Professional Sarah")).unwrap();
    assert!(!created.id.is_nil());
    assert_eq!(created.name, "Urban Professional Sarah");
    assert_eq!(service.persona_count(), 1);

    let fetched = service.get_persona(created.id).unwrap();
    assert_eq!(fetched, created);
}

#[test]
fn rapid_successive_creates_yield_distinct_ids() {
    let mut service = PersonaService::new();
    let mut ids = HashSet::new();

    for index in 0..500 {
        let created = service.create_persona(named_draft(&format!("Persona {index}"))).unwrap();
        assert!(!created.id.is_nil());
        ids.insert(created.id);
    }

    assert_eq!(ids.len(), 500);
    assert_eq!(service.persona_count(), 500);
}

#[test]
fn absent_draft_fields_commit_as_schema_defaults() {
    let mut service = PersonaService::new();

    let created = service.create_persona(PersonaDraft::default()).unwrap();
    assert!(created.name.is_empty());
    assert!(created.avatar.is_none());
    assert_eq!(created.demographics, Demographics::default());
    assert!(created.preferences.brands.is_empty());
    assert!(created.behaviors.loyalty_status.is_empty());
}

#[test]
fn update_replaces_by_identity_and_keeps_list_position() {
    let mut service = PersonaService::new();
    let first = service
        .create_persona(PersonaDraft {
            name: Some("Urban Professional Sarah".to_string()),
            demographics: Some(Demographics {
                age_range: "28-35".to_string(),
                income: "$75,000-$100,000".to_string(),
                location: "Metropolitan Area".to_string(),
                occupation: "Marketing Manager".to_string(),
            }),
            ..PersonaDraft::default()
        })
        .unwrap();
    let second = service.create_persona(named_draft("Tech Enthusiast Alex")).unwrap();

    let patch = PersonaPatch {
        demographics: Some(DemographicsPatch {
            income: Some("$90,000".to_string()),
            ..DemographicsPatch::default()
        }),
        ..PersonaPatch::default()
    };
    let updated = service.update_persona(first.id, &patch).unwrap();

    assert_eq!(updated.id, first.id);
    assert_eq!(updated.demographics.income, "$90,000");
    assert_eq!(updated.demographics.age_range, "28-35");

    // Edit-by-identity keeps the original slot; the list does not reorder.
    let listed = service.list_personas();
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].id, first.id);
    assert_eq!(listed[0].demographics.income, "$90,000");
    assert_eq!(listed[1].id, second.id);
}

#[test]
fn update_unknown_persona_reports_not_found() {
    let mut service = PersonaService::new();
    let missing = Uuid::new_v4();

    let err = service.update_persona(missing, &PersonaPatch::default()).unwrap_err();
    assert!(matches!(err, PersonaServiceError::PersonaNotFound(id) if id == missing));
}

#[test]
fn get_unknown_persona_returns_none() {
    let service = PersonaService::new();
    assert!(service.get_persona(Uuid::new_v4()).is_none());
}

#[test]
fn created_persona_is_findable_by_name_fragment() {
    let mut service = PersonaService::new();
    let created = service.create_persona(named_draft("Alex")).unwrap();

    let hits = service.filter_personas("ale");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, created.id);
}
