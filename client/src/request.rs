//! Search request construction
//!
//! This module builds the outbound search request for either mode. In
//! personal mode every non-blank field is sent as a full digest; in
//! sensitive mode only the k-anonymity prefix leaves the process and the
//! full digest is retained client-side for response verification.

use std::collections::HashMap;

use breachguard_core::crypto::partial_hash;
use breachguard_core::models::{SearchMode, SearchRequest};
use breachguard_core::{FieldHasher, FieldType};

use crate::error::{Result, SearchError};

/// Client-side registry of full digests for one search
///
/// Keyed by field type, held only for the duration of a single
/// sensitive-mode search and consumed by the result verifier. Never
/// serialized and never sent to the server; each search gets a fresh
/// registry so an abandoned search cannot leak digests into the next one.
#[derive(Debug, Default)]
pub struct ClientHashRegistry {
    hashes: HashMap<FieldType, String>,
}

impl ClientHashRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        ClientHashRegistry::default()
    }

    /// Record the full digest for a field type
    pub fn insert(&mut self, field_type: FieldType, full_hash: String) {
        self.hashes.insert(field_type, full_hash);
    }

    /// Get the full digest held for a field type
    pub fn get(&self, field_type: FieldType) -> Option<&str> {
        self.hashes.get(&field_type).map(String::as_str)
    }

    /// Whether the registry holds no digests
    pub fn is_empty(&self) -> bool {
        self.hashes.is_empty()
    }

    /// Field types the registry holds digests for
    pub fn field_types(&self) -> Vec<FieldType> {
        self.hashes.keys().copied().collect()
    }
}

/// Builder for one outbound search request
#[derive(Debug)]
pub struct SearchRequestBuilder {
    mode: SearchMode,
    values: Vec<(FieldType, String)>,
    hasher: FieldHasher,
}

impl SearchRequestBuilder {
    /// Create a builder for the given search mode
    pub fn new(mode: SearchMode) -> Self {
        SearchRequestBuilder {
            mode,
            values: Vec::new(),
            hasher: FieldHasher::default(),
        }
    }

    /// Set the hasher used for digest computation
    pub fn with_hasher(mut self, hasher: FieldHasher) -> Self {
        self.hasher = hasher;
        self
    }

    /// Add a raw field value
    ///
    /// Blank values are accepted here and silently omitted at build time.
    pub fn field(mut self, field_type: FieldType, value: impl Into<String>) -> Self {
        self.values.push((field_type, value.into()));
        self
    }

    /// Build the outbound request and the client-side hash registry
    ///
    /// Personal mode hashes every non-blank field in full. Sensitive mode
    /// accepts exactly one non-blank field, retains its full digest in the
    /// registry, and places only the partial digest in the request. Fails
    /// with [`SearchError::NoSearchData`] when no non-blank field remains,
    /// before any network call is made.
    pub fn build(self) -> Result<(SearchRequest, ClientHashRegistry)> {
        let mut fields = HashMap::new();
        let mut registry = ClientHashRegistry::new();

        let active: Vec<(FieldType, &str)> = self
            .values
            .iter()
            .map(|(field_type, value)| (*field_type, value.trim()))
            .filter(|(_, value)| !value.is_empty())
            .collect();

        match self.mode {
            SearchMode::Personal => {
                for (field_type, value) in active {
                    fields.insert(field_type, self.hasher.hash(value, field_type));
                }
            }
            SearchMode::Sensitive => {
                if active.len() > 1 {
                    return Err(SearchError::MultipleSensitiveFields);
                }
                if let Some((field_type, value)) = active.into_iter().next() {
                    let full = self.hasher.hash(value, field_type);
                    fields.insert(field_type, partial_hash(&full));
                    registry.insert(field_type, full);
                }
            }
        }

        if fields.is_empty() {
            return Err(SearchError::NoSearchData);
        }

        Ok((
            SearchRequest {
                mode: self.mode,
                fields,
            },
            registry,
        ))
    }
}
