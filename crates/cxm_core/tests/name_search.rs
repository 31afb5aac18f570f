use cxm_core::{JourneyDraft, JourneyService, PersonaDraft, PersonaService};

fn seeded_personas() -> PersonaService {
    let mut service = PersonaService::new();
    for name in ["Urban Professional Sarah", "Tech Enthusiast Alex", "Budget Shopper Maria"] {
        service
            .create_persona(PersonaDraft {
                name: Some(name.to_string()),
                ..PersonaDraft::default()
            })
            .unwrap();
    }
    service
}

#[test]
fn empty_query_returns_every_record_in_insertion_order() {
    let service = seeded_personas();

    let all = service.filter_personas("");
    assert_eq!(all.len(), 3);
    assert_eq!(all[0].name, "Urban Professional Sarah");
    assert_eq!(all[1].name, "Tech Enthusiast Alex");
    assert_eq!(all[2].name, "Budget Shopper Maria");
}

#[test]
fn query_matches_case_insensitively() {
    let service = seeded_personas();

    for query in ["sarah", "SARAH", "Sarah"] {
        let hits = service.filter_personas(query);
        assert_eq!(hits.len(), 1, "query `{query}` should match exactly one");
        assert_eq!(hits[0].name, "Urban Professional Sarah");
    }
}

#[test]
fn unmatched_query_returns_empty() {
    let service = seeded_personas();
    assert!(service.filter_personas("nobody").is_empty());
}

#[test]
fn filtering_leaves_the_store_unchanged() {
    let service = seeded_personas();

    let _ = service.filter_personas("alex");
    let all = service.filter_personas("");
    assert_eq!(all.len(), 3);
    assert_eq!(all[0].name, "Urban Professional Sarah");
}

#[test]
fn journeys_filter_with_the_same_rule() {
    let mut service = JourneyService::new();
    for name in ["Home Office Setup Journey", "Holiday Gifting Journey"] {
        service
            .create_journey(JourneyDraft {
                name: Some(name.to_string()),
                ..JourneyDraft::default()
            })
            .unwrap();
    }

    let hits = service.filter_journeys("OFFICE");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].name, "Home Office Setup Journey");
    assert_eq!(service.filter_journeys("").len(), 2);
}
