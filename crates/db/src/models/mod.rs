//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row,
//!   with a `Display` impl rendering the entity's display field
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) for patches

pub mod actor;
pub mod character;
pub mod framework;
pub mod language;
pub mod movie;
pub mod simple;
