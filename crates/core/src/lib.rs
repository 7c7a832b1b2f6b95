//! Shared domain types and errors for the roster workspace.

pub mod error;
pub mod types;
