//! Breach record types
//!
//! Server-supplied breach shapes for both search modes, plus the verified
//! per-breach summary returned to callers.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::fields::FieldType;
use crate::scoring::Severity;

/// A breach the server claims matches, personal mode
///
/// The client sent full digests, so the server's `matched_fields` claim is
/// authoritative and trusted as-is.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExactMatchBreach {
    /// Breach name
    pub name: String,

    /// Breach date (`YYYY-MM-DD`)
    pub date: String,

    /// Affected-record count as a display string
    pub affected_records: String,

    /// Field types the server matched
    pub matched_fields: Vec<FieldType>,

    /// Whether the server considers this a partial match
    #[serde(default)]
    pub partial_match: bool,
}

/// A candidate breach from the k-anonymity path, sensitive mode
///
/// Per field type, the server returns every full digest sharing the
/// submitted partial digest. Consumed once per search; whether any
/// candidate genuinely matches is decided client-side only.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateBreach {
    /// Breach name
    pub name: String,

    /// Breach date
    pub date: String,

    /// Affected-record count as a display string
    pub affected_records: String,

    /// Candidate full digests per field type
    #[serde(default)]
    pub hash_candidates: HashMap<FieldType, Vec<String>>,
}

/// Server response for a personal-mode search
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalResponse {
    /// Breaches the server matched on full digests
    #[serde(default)]
    pub exact_matches: Vec<ExactMatchBreach>,

    /// Field types the server searched
    #[serde(default)]
    pub search_fields: Vec<FieldType>,
}

/// A verified, scored breach summary
///
/// Created fresh per search by the result verifier and discarded when the
/// next search starts.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BreachSummary {
    /// Breach name
    pub name: String,

    /// Breach date
    pub date: String,

    /// Affected-record count as a display string
    pub records: String,

    /// Derived severity label
    pub severity: Severity,

    /// Field types verified as matched
    pub matched_fields: Vec<FieldType>,

    /// Whether the match is partial (always false for entries that
    /// survive sensitive-mode reconciliation)
    pub partial_match: bool,

    /// Derived risk score in [0, 100]
    pub risk_score: u32,

    /// Relative breach age, e.g. "3 days ago"
    pub time_ago: String,
}
