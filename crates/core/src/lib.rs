//! Shared domain types and the error taxonomy for the campusbuddy backend.

pub mod error;
pub mod types;
