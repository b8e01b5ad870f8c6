//! Search request and aggregate result types

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::fields::FieldType;
use crate::models::BreachSummary;
use crate::scoring::parse_record_count;

/// Search mode selecting the matching protocol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchMode {
    /// Multiple simultaneous fields, matched by full digest on the server
    Personal,

    /// Exactly one field, matched by k-anonymity partial digest
    Sensitive,
}

/// Outbound search request
///
/// In personal mode every value is a full digest; in sensitive mode the
/// single value is a partial digest and the full digest stays client-side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchRequest {
    /// Search mode
    pub mode: SearchMode,

    /// Digest (full or partial) per field type
    pub fields: HashMap<FieldType, String>,
}

/// Aggregate result of one breach search
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResults {
    /// Whether any breach matched
    pub found: bool,

    /// Number of matched breaches
    pub breaches: usize,

    /// Total affected records summed across matched breaches
    pub records: u64,

    /// Field types that were searched
    pub search_fields: Vec<FieldType>,

    /// Number of matched breaches (mirrors `breaches` for the UI)
    pub total_breaches: usize,

    /// Per-breach summaries
    pub breach_list: Vec<BreachSummary>,
}

impl SearchResults {
    /// Create an empty, not-found result
    pub fn empty(search_fields: Vec<FieldType>) -> Self {
        SearchResults {
            found: false,
            breaches: 0,
            records: 0,
            search_fields,
            total_breaches: 0,
            breach_list: vec![],
        }
    }

    /// Aggregate per-breach summaries into a result set
    ///
    /// `found` holds iff at least one summary exists; `records` sums each
    /// summary's affected-record display string with non-digits stripped.
    pub fn from_summaries(breach_list: Vec<BreachSummary>, search_fields: Vec<FieldType>) -> Self {
        let records = breach_list
            .iter()
            .map(|breach| parse_record_count(&breach.records))
            .sum();

        SearchResults {
            found: !breach_list.is_empty(),
            breaches: breach_list.len(),
            records,
            search_fields,
            total_breaches: breach_list.len(),
            breach_list,
        }
    }
}
