/// BreachGuard - privacy-preserving breach search
///
/// This is the root crate that provides workspace-level documentation.
/// Actual implementation is in the subcrates:
/// - `breachguard-core`: Field normalization, salted hashing, and scoring primitives
/// - `breachguard-client`: Client library for querying the breach-search service

/// This module is intentionally empty as the actual implementation
/// is in the subcrates.
/// Returns the version of the package.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
