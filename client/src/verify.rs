//! Client-side response verification
//!
//! This module turns server responses into verified, scored result sets.
//! Personal-mode responses are trusted as-is (the server saw full digests
//! and can assert equality authoritatively). Sensitive-mode responses are
//! reconciled locally: a field only counts as matched when the full digest
//! held in the client registry appears in the server's candidate list, so
//! the server never learns which exact value matched.

use log::{debug, warn};
use serde_json::Value;

use breachguard_core::models::{
    BreachSummary, CandidateBreach, PersonalResponse, SearchResults,
};
use breachguard_core::scoring::{risk_score, severity, time_ago};
use breachguard_core::crypto::digests_match;
use breachguard_core::FieldType;

use crate::request::ClientHashRegistry;

/// Process a personal-mode response into results
///
/// The server's `matchedFields` claim is trusted for each exact match;
/// each entry is scored and the aggregate totals are computed.
pub fn process_exact_matches(response: &PersonalResponse) -> SearchResults {
    let summaries: Vec<BreachSummary> = response
        .exact_matches
        .iter()
        .map(|breach| BreachSummary {
            name: breach.name.clone(),
            date: breach.date.clone(),
            records: breach.affected_records.clone(),
            severity: severity(&breach.matched_fields, &breach.affected_records),
            matched_fields: breach.matched_fields.clone(),
            partial_match: breach.partial_match,
            risk_score: risk_score(&breach.matched_fields),
            time_ago: time_ago(&breach.date),
        })
        .collect();

    SearchResults::from_summaries(summaries, response.search_fields.clone())
}

/// Reconcile a sensitive-mode response against the client hash registry
///
/// For each candidate breach, a field type counts as matched only when the
/// registry holds a full digest for it and that digest appears in the
/// server-supplied candidate list. Candidates with no genuinely matched
/// field are partial-hash collisions and are dropped. Surviving entries
/// are verified exact matches, so `partial_match` is always false.
///
/// Malformed payloads degrade to an empty, not-found result with a logged
/// warning rather than an error.
pub fn verify_candidates(response: &Value, registry: &ClientHashRegistry) -> SearchResults {
    let search_fields = registry.field_types();

    let candidates = match response.get("candidateBreaches") {
        Some(Value::Array(entries)) => entries,
        Some(other) => {
            warn!("candidateBreaches is not an array: {}", other);
            return SearchResults::empty(search_fields);
        }
        None => {
            debug!("response carries no candidateBreaches");
            return SearchResults::empty(search_fields);
        }
    };

    let mut verified = Vec::new();

    for entry in candidates {
        let breach: CandidateBreach = match serde_json::from_value(entry.clone()) {
            Ok(breach) => breach,
            Err(err) => {
                warn!("skipping malformed candidate breach: {}", err);
                continue;
            }
        };

        let matched_fields: Vec<FieldType> = search_fields
            .iter()
            .copied()
            .filter(|field_type| {
                let Some(client_hash) = registry.get(*field_type) else {
                    return false;
                };
                breach
                    .hash_candidates
                    .get(field_type)
                    .map(|candidates| {
                        candidates
                            .iter()
                            .any(|candidate| digests_match(candidate, client_hash))
                    })
                    .unwrap_or(false)
            })
            .collect();

        if matched_fields.is_empty() {
            debug!("dropping candidate {:?}: no field verified locally", breach.name);
            continue;
        }

        verified.push(BreachSummary {
            name: breach.name.clone(),
            date: breach.date.clone(),
            records: breach.affected_records.clone(),
            severity: severity(&matched_fields, &breach.affected_records),
            risk_score: risk_score(&matched_fields),
            matched_fields,
            partial_match: false,
            time_ago: time_ago(&breach.date),
        });
    }

    SearchResults::from_summaries(verified, search_fields)
}
