//! Demo catalog shown before the user creates any records.
//!
//! Record identities and timestamps are fixed so detail-view links and
//! serialized output stay stable across session restarts.

use crate::model::journey::{CustomerJourney, JourneyStep, StepMetrics};
use crate::model::persona::{Behaviors, Demographics, Persona, Preferences};
use chrono::{DateTime, Utc};
use uuid::Uuid;

const SARAH_ID: &str = "9f0c2f4e-5b7a-4d2c-8e1f-3a6b9d0c5e71";
const ALEX_ID: &str = "2b8d4a6c-1e9f-4b3a-a7d5-0c2e8f4b6d92";
const HOME_OFFICE_JOURNEY_ID: &str = "7d3e9b1f-6c4a-4f8e-b2d0-5a1c7e9f3b64";

fn fixed_id(value: &str) -> Uuid {
    Uuid::parse_str(value).expect("valid sample uuid")
}

fn fixed_instant(value: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(value)
        .expect("valid sample timestamp")
        .with_timezone(&Utc)
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| (*value).to_string()).collect()
}

/// The two demo personas.
pub fn sample_personas() -> Vec<Persona> {
    vec![
        Persona {
            id: fixed_id(SARAH_ID),
            name: "Urban Professional Sarah".to_string(),
            avatar: Some(
                "https://images.unsplash.com/photo-1494790108377-be9c29b29330?w=400&h=400"
                    .to_string(),
            ),
            demographics: Demographics {
                age_range: "28-35".to_string(),
                income: "$75,000-$100,000".to_string(),
                location: "Metropolitan Area".to_string(),
                occupation: "Marketing Manager".to_string(),
            },
            preferences: Preferences {
                brands: strings(&["Lifestyle Co", "Modern Home", "Fashion Forward"]),
                categories: strings(&["Home Office", "Casual Wear", "Home Decor"]),
                price_range: "Premium".to_string(),
                shopping_frequency: "Bi-weekly".to_string(),
            },
            behaviors: Behaviors {
                purchase_drivers: strings(&["Quality", "Design", "Sustainability"]),
                channel_preferences: strings(&["Mobile App", "Physical Store"]),
                loyalty_status: "Gold Member".to_string(),
            },
        },
        Persona {
            id: fixed_id(ALEX_ID),
            name: "Tech Enthusiast Alex".to_string(),
            avatar: Some(
                "https://images.unsplash.com/photo-1539571696357-5a69c17a67c6?w=400&h=400"
                    .to_string(),
            ),
            demographics: Demographics {
                age_range: "25-32".to_string(),
                income: "$90,000-$120,000".to_string(),
                location: "Tech Hub City".to_string(),
                occupation: "Software Developer".to_string(),
            },
            preferences: Preferences {
                brands: strings(&["TechGear", "SmartLife", "FutureWear"]),
                categories: strings(&["Electronics", "Smart Home", "Activewear"]),
                price_range: "High-end".to_string(),
                shopping_frequency: "Monthly".to_string(),
            },
            behaviors: Behaviors {
                purchase_drivers: strings(&["Innovation", "Performance", "Brand"]),
                channel_preferences: strings(&["Online", "Mobile App"]),
                loyalty_status: "Platinum".to_string(),
            },
        },
    ]
}

/// The demo journey, three touchpoints from research to purchase.
pub fn sample_journeys() -> Vec<CustomerJourney> {
    vec![CustomerJourney {
        id: fixed_id(HOME_OFFICE_JOURNEY_ID),
        name: "Home Office Setup Journey".to_string(),
        brand: "Modern Home".to_string(),
        persona: "Urban Professional Sarah".to_string(),
        cover_image: Some(
            "https://images.unsplash.com/photo-1486946255434-2466348c2166?w=1200".to_string(),
        ),
        steps: vec![
            JourneyStep {
                id: fixed_id("4a7c1e9b-3d5f-4a2c-9b8e-6f0d2a4c8e13"),
                title: "Initial Research".to_string(),
                description: "Customer browses home office furniture on mobile app".to_string(),
                touchpoint: "Mobile App".to_string(),
                image: Some(
                    "https://images.unsplash.com/photo-1517430816045-df4b7de11d1d?w=800"
                        .to_string(),
                ),
                metrics: StepMetrics {
                    satisfaction: 85.0,
                    engagement: 90.0,
                    conversion: 60.0,
                },
            },
            JourneyStep {
                id: fixed_id("8e2b6d0f-7a9c-4c4e-8d1b-3f5a7c9e1b35"),
                title: "Store Visit".to_string(),
                description: "Customer visits physical store for product testing".to_string(),
                touchpoint: "Physical Store".to_string(),
                image: Some(
                    "https://images.unsplash.com/photo-1441986300917-64674bd600d8?w=800"
                        .to_string(),
                ),
                metrics: StepMetrics {
                    satisfaction: 92.0,
                    engagement: 88.0,
                    conversion: 75.0,
                },
            },
            JourneyStep {
                id: fixed_id("1c5e9a3d-0b2f-4e6a-9f4c-7d8b0e2a4c57"),
                title: "Purchase Decision".to_string(),
                description: "Customer completes purchase through mobile app".to_string(),
                touchpoint: "Mobile App".to_string(),
                image: Some(
                    "https://images.unsplash.com/photo-1450101499163-c8848c66ca85?w=800"
                        .to_string(),
                ),
                metrics: StepMetrics {
                    satisfaction: 95.0,
                    engagement: 95.0,
                    conversion: 100.0,
                },
            },
        ],
        created_at: fixed_instant("2024-03-15T10:00:00Z"),
        updated_at: fixed_instant("2024-03-15T15:30:00Z"),
    }]
}
