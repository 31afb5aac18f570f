//! Domain model for personas and customer journeys.
//!
//! # Responsibility
//! - Define canonical record shapes plus their draft/patch input shapes.
//! - Keep wire naming (`camelCase`) identical for every serialized type.
//!
//! # Invariants
//! - Every committed record carries a stable, unique ID.
//! - Records are never mutated in place; edit flows build a replacement
//!   record under the same ID.

pub mod journey;
pub mod persona;
