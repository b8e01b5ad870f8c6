//! Data models for breach searches
//!
//! This module provides the wire-contract types exchanged with the
//! breach-search service and the structured result types handed back to
//! callers after client-side verification.

mod breach;
mod search;

pub use breach::{BreachSummary, CandidateBreach, ExactMatchBreach, PersonalResponse};
pub use search::{SearchMode, SearchRequest, SearchResults};
