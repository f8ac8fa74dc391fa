//! Language entity model and DTOs.

use std::fmt;

use catalog_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `languages` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Language {
    pub id: DbId,
    pub name: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// DTO for creating a new language.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateLanguage {
    pub name: String,
}

/// DTO for updating a language. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateLanguage {
    pub name: Option<String>,
}
