//! Configurable field hasher
//!
//! This module provides the digest computation behind the free functions
//! in [`crate::crypto`], parameterized by hash algorithm so a deployment
//! can be pinned to either digest width.

use sha2::{Digest, Sha256, Sha512};

use crate::config::HashAlgorithm;
use crate::crypto::{field_salt, UNIVERSAL_SALT};
use crate::fields::{normalize, FieldType};

/// Salted hasher for field values
///
/// A deployment must use a single algorithm end to end: the breach-search
/// service indexes records under one digest width, and digests from the
/// two algorithms never compare equal.
#[derive(Debug, Clone, Copy, Default)]
pub struct FieldHasher {
    algorithm: HashAlgorithm,
}

impl FieldHasher {
    /// Create a hasher using the given algorithm
    pub fn new(algorithm: HashAlgorithm) -> Self {
        FieldHasher { algorithm }
    }

    /// Get the algorithm this hasher is pinned to
    pub fn algorithm(&self) -> HashAlgorithm {
        self.algorithm
    }

    /// Compute the full salted digest for a field value
    ///
    /// # Arguments
    ///
    /// * `value` - Raw field value as entered by the user
    /// * `field_type` - Field type selecting the normalization rule and salt
    ///
    /// # Returns
    ///
    /// The digest of `UNIVERSAL_SALT || field_salt || normalized` as a
    /// lowercase hex string
    pub fn hash(&self, value: &str, field_type: FieldType) -> String {
        let normalized = normalize(value, field_type);
        let combined = format!(
            "{}{}{}",
            UNIVERSAL_SALT,
            field_salt(field_type),
            normalized
        );

        match self.algorithm {
            HashAlgorithm::Sha256 => hex::encode(Sha256::digest(combined.as_bytes())),
            HashAlgorithm::Sha512 => hex::encode(Sha512::digest(combined.as_bytes())),
        }
    }

    /// Hex length of the digests this hasher produces
    pub fn digest_len(&self) -> usize {
        match self.algorithm {
            HashAlgorithm::Sha256 => 64,
            HashAlgorithm::Sha512 => 128,
        }
    }
}
