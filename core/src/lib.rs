//! # BreachGuard Core
//!
//! Field normalization, salted hashing, and scoring primitives for the
//! privacy-preserving breach search. This crate provides everything the
//! client needs to hash field values before they leave the process and to
//! score verified matches; the network flow lives in `breachguard-client`.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod crypto;
pub mod fields;
pub mod models;
pub mod scoring;

/// Re-export common types for ease of use
pub use config::HashAlgorithm;
pub use crypto::FieldHasher;
pub use fields::{normalize, FieldType};
pub use models::{BreachSummary, SearchMode, SearchRequest, SearchResults};
pub use scoring::Severity;

/// Version of the core crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
