//! Configuration for the core crate
//!
//! This module provides configuration options for the hashing scheme.

use serde::{Deserialize, Serialize};

/// Hash algorithm to use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HashAlgorithm {
    /// SHA-256 (64 hex characters)
    Sha256,

    /// SHA-512 (128 hex characters)
    Sha512,
}

impl Default for HashAlgorithm {
    fn default() -> Self {
        // Production deployments index breach records under SHA-512
        HashAlgorithm::Sha512
    }
}

/// Hashing configuration
///
/// The algorithm must match the one the breach-search service used when
/// indexing its records; the two digest widths must never be mixed within
/// one deployment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HashingConfig {
    /// Hash algorithm for full digests
    pub algorithm: HashAlgorithm,
}

impl Default for HashingConfig {
    fn default() -> Self {
        HashingConfig {
            algorithm: HashAlgorithm::default(),
        }
    }
}
