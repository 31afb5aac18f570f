//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `cxm_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use cxm_core::DashboardSession;

fn main() {
    println!("cxm_core ping={}", cxm_core::ping());
    println!("cxm_core version={}", cxm_core::core_version());

    // Seeded session exercises store wiring without any UI runtime.
    let session = DashboardSession::with_sample_data();
    println!("sample personas={}", session.personas.persona_count());
    println!("sample journeys={}", session.journeys.journey_count());
}
