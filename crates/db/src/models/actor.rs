//! Actor entity model and DTOs.
//!
//! Actors relate to movies through the `actor_movies` join table; the
//! association rows are owned by the table itself, not by either side.

use std::fmt;

use catalog_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `actors` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Actor {
    pub id: DbId,
    pub name: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl fmt::Display for Actor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// DTO for creating a new actor.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateActor {
    pub name: String,
}

/// DTO for updating an actor. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateActor {
    pub name: Option<String>,
}
