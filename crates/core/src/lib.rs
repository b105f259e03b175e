//! Shared domain types for the askhub workspace.
//!
//! Holds the primary-key alias, the domain error enum, and the input checks
//! applied by the HTTP layer before anything reaches storage.

pub mod error;
pub mod qa;
pub mod types;
