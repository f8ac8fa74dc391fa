//! Simple entity model and DTOs.

use std::fmt;

use catalog_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `simples` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Simple {
    pub id: DbId,
    pub text: String,
    pub number: Option<i64>,
    /// NOT NULL in the database; defaults to `DEFAULT_SIMPLE_URL`.
    pub url: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl fmt::Display for Simple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// DTO for creating a new simple.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateSimple {
    pub text: String,
    pub number: Option<i64>,
    /// Defaults to `DEFAULT_SIMPLE_URL` if omitted; validated if provided.
    pub url: Option<String>,
}

/// DTO for updating an existing simple. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateSimple {
    pub text: Option<String>,
    pub number: Option<i64>,
    pub url: Option<String>,
}
