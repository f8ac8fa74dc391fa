//! Shared scalar types, domain errors, and field validation for the
//! catalog workspace.

pub mod error;
pub mod fields;
pub mod types;
