//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate store operations into use-case level APIs.
//! - Keep UI/FFI layers decoupled from collection bookkeeping.

pub mod journey_service;
pub mod persona_service;
