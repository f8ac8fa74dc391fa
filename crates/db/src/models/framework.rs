//! Framework entity model and DTOs.

use std::fmt;

use catalog_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `frameworks` table.
///
/// `language_id` is a required FK to `languages`; the row is deleted
/// when its language is (ON DELETE CASCADE).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Framework {
    pub id: DbId,
    pub name: String,
    pub language_id: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl fmt::Display for Framework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// DTO for creating a new framework.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateFramework {
    pub name: String,
    /// Must resolve to an existing language at write time.
    pub language_id: DbId,
}

/// DTO for updating a framework. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateFramework {
    pub name: Option<String>,
    pub language_id: Option<DbId>,
}
