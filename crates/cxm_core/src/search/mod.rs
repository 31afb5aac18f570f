//! Record search entry points.
//!
//! # Responsibility
//! - Expose the shared name-matching rule used by list filtering.

pub mod name_filter;
