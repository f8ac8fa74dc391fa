//! Repository for the `simples` table.

use catalog_core::fields::{validate_name, validate_url, DEFAULT_SIMPLE_URL};
use catalog_core::types::DbId;
use sqlx::SqlitePool;

use crate::error::DbResult;
use crate::models::simple::{CreateSimple, Simple, UpdateSimple};

/// Column list for `simples` queries.
const COLUMNS: &str = "id, text, number, url, created_at, updated_at";

/// Provides CRUD operations for simples.
pub struct SimpleRepo;

impl SimpleRepo {
    /// Insert a new simple, returning the created row.
    ///
    /// If `url` is omitted it defaults to [`DEFAULT_SIMPLE_URL`]; a
    /// provided value must parse as an absolute URL.
    pub async fn create(pool: &SqlitePool, input: &CreateSimple) -> DbResult<Simple> {
        validate_name("Simple text", &input.text)?;
        let url = match &input.url {
            Some(url) => {
                validate_url(url)?;
                url.as_str()
            }
            None => DEFAULT_SIMPLE_URL,
        };

        let query = format!(
            "INSERT INTO simples (text, number, url)
             VALUES (?, ?, ?)
             RETURNING {COLUMNS}"
        );
        let simple = sqlx::query_as::<_, Simple>(&query)
            .bind(&input.text)
            .bind(input.number)
            .bind(url)
            .fetch_one(pool)
            .await?;
        Ok(simple)
    }

    /// Find a simple by its ID.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> DbResult<Option<Simple>> {
        let query = format!("SELECT {COLUMNS} FROM simples WHERE id = ?");
        let simple = sqlx::query_as::<_, Simple>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(simple)
    }

    /// List all simples, ordered by id ascending.
    pub async fn list(pool: &SqlitePool) -> DbResult<Vec<Simple>> {
        let query = format!("SELECT {COLUMNS} FROM simples ORDER BY id ASC");
        let simples = sqlx::query_as::<_, Simple>(&query).fetch_all(pool).await?;
        Ok(simples)
    }

    /// Update a simple. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &SqlitePool,
        id: DbId,
        input: &UpdateSimple,
    ) -> DbResult<Option<Simple>> {
        if let Some(text) = &input.text {
            validate_name("Simple text", text)?;
        }
        if let Some(url) = &input.url {
            validate_url(url)?;
        }

        let query = format!(
            "UPDATE simples SET
                text = COALESCE(?, text),
                number = COALESCE(?, number),
                url = COALESCE(?, url),
                updated_at = strftime('%Y-%m-%dT%H:%M:%fZ', 'now')
             WHERE id = ?
             RETURNING {COLUMNS}"
        );
        let simple = sqlx::query_as::<_, Simple>(&query)
            .bind(&input.text)
            .bind(input.number)
            .bind(&input.url)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(simple)
    }

    /// Delete a simple by ID. Returns `true` if a row was deleted.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> DbResult<bool> {
        let result = sqlx::query("DELETE FROM simples WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
