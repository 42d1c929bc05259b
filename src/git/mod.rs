//! Git operations and repository management.

pub mod checkout;
pub mod matching;
pub mod repository;

pub use checkout::fuzzy_checkout;
pub use repository::GitRepository;

/// Minimum similarity ratio for a fuzzy match to be checked out automatically.
pub const SIMILARITY_THRESHOLD: f64 = 0.6;
