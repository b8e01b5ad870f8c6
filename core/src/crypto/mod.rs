//! Salted hashing primitives for breach searches
//!
//! This module provides the salted digest scheme used before any field
//! value leaves the client. Every digest covers the concatenation of a
//! process-wide universal salt, a per-field salt, and the normalized
//! value, so the same raw value hashed under two field types never
//! collides.

mod hasher;

pub use hasher::FieldHasher;

use constant_time_eq::constant_time_eq;

use crate::fields::FieldType;

/// Universal salt prepended to every digest input
///
/// Process-wide read-only constant; must match the value the breach-search
/// service used when indexing its records.
pub const UNIVERSAL_SALT: &str = "your-super-secret-universal-salt-breachguard";

/// Fallback salt for field tags that have no dedicated salt assigned
///
/// Using this path weakens domain separation between field types, so it is
/// only reachable for wire tags added ahead of a salt assignment.
pub const DEFAULT_FIELD_SALT: &str = "default_salt";

/// Number of hex characters retained by [`partial_hash`]
///
/// Must stay consistent between client and server; every digest sharing
/// this prefix forms one k-anonymity candidate set.
pub const PARTIAL_HASH_LEN: usize = 8;

/// Get the salt for a field type
///
/// Every variant has a dedicated salt; [`DEFAULT_FIELD_SALT`] is the
/// documented fallback for unmapped tags.
pub fn field_salt(field_type: FieldType) -> &'static str {
    match field_type {
        FieldType::Email => "email_salt",
        FieldType::Phone => "phone_salt",
        FieldType::FirstName => "fname_salt",
        FieldType::LastName => "lname_salt",
        FieldType::Ssn => "ssn_salt",
        FieldType::CreditCard => "cc_salt",
        FieldType::Password => "password_salt",
        FieldType::Username => "username_salt",
        FieldType::Address => "address_salt",
        FieldType::City => "city_salt",
        FieldType::State => "state_salt",
        FieldType::ZipCode => "zip_salt",
        FieldType::Country => "country_salt",
        FieldType::DateOfBirth => "dob_salt",
        FieldType::DriverLicense => "dl_salt",
        FieldType::Passport => "passport_salt",
    }
}

/// Compute the full salted digest for a field value
///
/// Normalizes the value for its field type, concatenates
/// `UNIVERSAL_SALT || field_salt || normalized`, and digests the UTF-8
/// bytes with the default algorithm, rendered as lowercase hex.
///
/// # Arguments
///
/// * `value` - Raw field value as entered by the user
/// * `field_type` - Field type selecting the normalization rule and salt
///
/// # Returns
///
/// The full digest as a lowercase hex string
pub fn full_hash(value: &str, field_type: FieldType) -> String {
    FieldHasher::default().hash(value, field_type)
}

/// Derive the k-anonymity prefix of a full digest
///
/// Returns the first [`PARTIAL_HASH_LEN`] hex characters. The prefix is
/// the only digest material ever transmitted in sensitive mode; many
/// distinct full digests share one prefix.
pub fn partial_hash(full: &str) -> String {
    full[..PARTIAL_HASH_LEN.min(full.len())].to_string()
}

/// Compare two digest strings in constant time
///
/// Used when reconciling server-supplied candidate digests against the
/// client-held full digest, so the comparison itself leaks no timing
/// information about the match position.
pub fn digests_match(a: &str, b: &str) -> bool {
    constant_time_eq(a.as_bytes(), b.as_bytes())
}
