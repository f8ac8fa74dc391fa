//! Repository for the `frameworks` table.

use catalog_core::error::CoreError;
use catalog_core::fields::validate_name;
use catalog_core::types::DbId;
use sqlx::SqlitePool;

use crate::error::DbResult;
use crate::models::framework::{CreateFramework, Framework, UpdateFramework};

/// Column list for `frameworks` queries.
const COLUMNS: &str = "id, name, language_id, created_at, updated_at";

/// Provides CRUD operations for frameworks.
pub struct FrameworkRepo;

impl FrameworkRepo {
    /// Insert a new framework, returning the created row.
    ///
    /// `language_id` must resolve to an existing language; a dangling
    /// reference fails validation before the insert is attempted.
    pub async fn create(pool: &SqlitePool, input: &CreateFramework) -> DbResult<Framework> {
        validate_name("Framework name", &input.name)?;
        ensure_language_exists(pool, input.language_id).await?;

        let query = format!(
            "INSERT INTO frameworks (name, language_id)
             VALUES (?, ?)
             RETURNING {COLUMNS}"
        );
        let framework = sqlx::query_as::<_, Framework>(&query)
            .bind(&input.name)
            .bind(input.language_id)
            .fetch_one(pool)
            .await?;
        Ok(framework)
    }

    /// Find a framework by its ID.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> DbResult<Option<Framework>> {
        let query = format!("SELECT {COLUMNS} FROM frameworks WHERE id = ?");
        let framework = sqlx::query_as::<_, Framework>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(framework)
    }

    /// List all frameworks, ordered by id ascending.
    pub async fn list(pool: &SqlitePool) -> DbResult<Vec<Framework>> {
        let query = format!("SELECT {COLUMNS} FROM frameworks ORDER BY id ASC");
        let frameworks = sqlx::query_as::<_, Framework>(&query)
            .fetch_all(pool)
            .await?;
        Ok(frameworks)
    }

    /// List all frameworks for a given language, ordered by name ascending.
    pub async fn list_by_language(
        pool: &SqlitePool,
        language_id: DbId,
    ) -> DbResult<Vec<Framework>> {
        let query = format!(
            "SELECT {COLUMNS} FROM frameworks
             WHERE language_id = ?
             ORDER BY name ASC"
        );
        let frameworks = sqlx::query_as::<_, Framework>(&query)
            .bind(language_id)
            .fetch_all(pool)
            .await?;
        Ok(frameworks)
    }

    /// Update a framework. Only non-`None` fields in `input` are applied.
    ///
    /// A provided `language_id` must resolve, like on create. Returns
    /// `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &SqlitePool,
        id: DbId,
        input: &UpdateFramework,
    ) -> DbResult<Option<Framework>> {
        if let Some(name) = &input.name {
            validate_name("Framework name", name)?;
        }
        if let Some(language_id) = input.language_id {
            ensure_language_exists(pool, language_id).await?;
        }

        let query = format!(
            "UPDATE frameworks SET
                name = COALESCE(?, name),
                language_id = COALESCE(?, language_id),
                updated_at = strftime('%Y-%m-%dT%H:%M:%fZ', 'now')
             WHERE id = ?
             RETURNING {COLUMNS}"
        );
        let framework = sqlx::query_as::<_, Framework>(&query)
            .bind(&input.name)
            .bind(input.language_id)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(framework)
    }

    /// Delete a framework by ID. Returns `true` if a row was deleted.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> DbResult<bool> {
        let result = sqlx::query("DELETE FROM frameworks WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

/// Check that `language_id` resolves to an existing language.
async fn ensure_language_exists(pool: &SqlitePool, language_id: DbId) -> DbResult<()> {
    let exists =
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM languages WHERE id = ?)")
            .bind(language_id)
            .fetch_one(pool)
            .await?;
    if exists {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "language_id {language_id} does not resolve to an existing language"
        ))
        .into())
    }
}
