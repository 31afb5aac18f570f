//! Record store layer.
//!
//! # Responsibility
//! - Provide the in-memory, insertion-ordered collection behind each
//!   record type.
//! - Keep collection bookkeeping (identity, ordering) out of service
//!   orchestration.
//!
//! # Invariants
//! - A store never holds two records with the same ID.
//! - Iteration order is append order; replacement keeps the original slot.

pub mod record_store;
