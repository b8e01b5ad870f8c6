//! # BreachGuard Client
//!
//! Client library for the BreachGuard breach-search service. Raw field
//! values are normalized and hashed before anything leaves the process;
//! sensitive fields travel only as k-anonymity digest prefixes, with the
//! final match decided client-side against the server's candidate list.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod request;
pub mod search;
pub mod verify;

pub use error::{Result, SearchError};
pub use request::{ClientHashRegistry, SearchRequestBuilder};
pub use search::BreachSearchClient;
pub use verify::{process_exact_matches, verify_candidates};
