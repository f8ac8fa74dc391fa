//! Repository for the `languages` table.

use catalog_core::fields::validate_name;
use catalog_core::types::DbId;
use sqlx::SqlitePool;

use crate::error::DbResult;
use crate::models::language::{CreateLanguage, Language, UpdateLanguage};

/// Column list for `languages` queries.
const COLUMNS: &str = "id, name, created_at, updated_at";

/// Provides CRUD operations for languages.
pub struct LanguageRepo;

impl LanguageRepo {
    /// Insert a new language, returning the created row.
    pub async fn create(pool: &SqlitePool, input: &CreateLanguage) -> DbResult<Language> {
        validate_name("Language name", &input.name)?;

        let query = format!(
            "INSERT INTO languages (name)
             VALUES (?)
             RETURNING {COLUMNS}"
        );
        let language = sqlx::query_as::<_, Language>(&query)
            .bind(&input.name)
            .fetch_one(pool)
            .await?;
        Ok(language)
    }

    /// Find a language by its ID.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> DbResult<Option<Language>> {
        let query = format!("SELECT {COLUMNS} FROM languages WHERE id = ?");
        let language = sqlx::query_as::<_, Language>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(language)
    }

    /// List all languages, ordered by id ascending.
    pub async fn list(pool: &SqlitePool) -> DbResult<Vec<Language>> {
        let query = format!("SELECT {COLUMNS} FROM languages ORDER BY id ASC");
        let languages = sqlx::query_as::<_, Language>(&query)
            .fetch_all(pool)
            .await?;
        Ok(languages)
    }

    /// Update a language. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &SqlitePool,
        id: DbId,
        input: &UpdateLanguage,
    ) -> DbResult<Option<Language>> {
        if let Some(name) = &input.name {
            validate_name("Language name", name)?;
        }

        let query = format!(
            "UPDATE languages SET
                name = COALESCE(?, name),
                updated_at = strftime('%Y-%m-%dT%H:%M:%fZ', 'now')
             WHERE id = ?
             RETURNING {COLUMNS}"
        );
        let language = sqlx::query_as::<_, Language>(&query)
            .bind(&input.name)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(language)
    }

    /// Delete a language by ID. Returns `true` if a row was deleted.
    ///
    /// Dependent frameworks are removed by the store (ON DELETE CASCADE).
    pub async fn delete(pool: &SqlitePool, id: DbId) -> DbResult<bool> {
        let result = sqlx::query("DELETE FROM languages WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        let deleted = result.rows_affected() > 0;
        if deleted {
            tracing::debug!(language_id = id, "Deleted language; frameworks cascade");
        }
        Ok(deleted)
    }
}
