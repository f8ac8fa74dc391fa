//! Repository for the `characters` and `character_movies` tables.
//!
//! Mirrors the actor side: character CRUD plus the character-movie
//! many-to-many association, kept in its own join table.

use catalog_core::error::CoreError;
use catalog_core::fields::validate_name;
use catalog_core::types::DbId;
use sqlx::SqlitePool;

use crate::error::DbResult;
use crate::models::character::{Character, CreateCharacter, UpdateCharacter};
use crate::models::movie::Movie;

/// Column list for `characters` queries.
const COLUMNS: &str = "id, name, created_at, updated_at";

/// Provides CRUD operations for characters and character-movie associations.
pub struct CharacterRepo;

impl CharacterRepo {
    // -----------------------------------------------------------------------
    // Character CRUD
    // -----------------------------------------------------------------------

    /// Insert a new character, returning the created row.
    pub async fn create(pool: &SqlitePool, input: &CreateCharacter) -> DbResult<Character> {
        validate_name("Character name", &input.name)?;

        let query = format!(
            "INSERT INTO characters (name)
             VALUES (?)
             RETURNING {COLUMNS}"
        );
        let character = sqlx::query_as::<_, Character>(&query)
            .bind(&input.name)
            .fetch_one(pool)
            .await?;
        Ok(character)
    }

    /// Find a character by its ID.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> DbResult<Option<Character>> {
        let query = format!("SELECT {COLUMNS} FROM characters WHERE id = ?");
        let character = sqlx::query_as::<_, Character>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(character)
    }

    /// List all characters, ordered by id ascending.
    pub async fn list(pool: &SqlitePool) -> DbResult<Vec<Character>> {
        let query = format!("SELECT {COLUMNS} FROM characters ORDER BY id ASC");
        let characters = sqlx::query_as::<_, Character>(&query)
            .fetch_all(pool)
            .await?;
        Ok(characters)
    }

    /// Update a character. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &SqlitePool,
        id: DbId,
        input: &UpdateCharacter,
    ) -> DbResult<Option<Character>> {
        if let Some(name) = &input.name {
            validate_name("Character name", name)?;
        }

        let query = format!(
            "UPDATE characters SET
                name = COALESCE(?, name),
                updated_at = strftime('%Y-%m-%dT%H:%M:%fZ', 'now')
             WHERE id = ?
             RETURNING {COLUMNS}"
        );
        let character = sqlx::query_as::<_, Character>(&query)
            .bind(&input.name)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(character)
    }

    /// Delete a character by ID. Returns `true` if a row was deleted.
    ///
    /// Join rows in `character_movies` cascade; the movies themselves
    /// are untouched.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> DbResult<bool> {
        let result = sqlx::query("DELETE FROM characters WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    // -----------------------------------------------------------------------
    // Movie associations
    // -----------------------------------------------------------------------

    /// Link a character to a movie. Idempotent: returns `false` if the
    /// link already exists, `true` if it was created.
    ///
    /// Both IDs must resolve; a nonexistent character or movie fails
    /// with `NotFound`.
    pub async fn add_movie(
        pool: &SqlitePool,
        character_id: DbId,
        movie_id: DbId,
    ) -> DbResult<bool> {
        ensure_character_exists(pool, character_id).await?;
        ensure_movie_exists(pool, movie_id).await?;

        let result = sqlx::query(
            "INSERT INTO character_movies (character_id, movie_id)
             VALUES (?, ?)
             ON CONFLICT (character_id, movie_id) DO NOTHING",
        )
        .bind(character_id)
        .bind(movie_id)
        .execute(pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Unlink a character from a movie.
    ///
    /// Both IDs must resolve; a nonexistent character or movie fails
    /// with `NotFound`, and a missing link fails with
    /// `AssociationNotFound`.
    pub async fn remove_movie(
        pool: &SqlitePool,
        character_id: DbId,
        movie_id: DbId,
    ) -> DbResult<()> {
        ensure_character_exists(pool, character_id).await?;
        ensure_movie_exists(pool, movie_id).await?;

        let result = sqlx::query(
            "DELETE FROM character_movies
             WHERE character_id = ? AND movie_id = ?",
        )
        .bind(character_id)
        .bind(movie_id)
        .execute(pool)
        .await?;

        if result.rows_affected() > 0 {
            Ok(())
        } else {
            Err(CoreError::AssociationNotFound {
                entity: "Character",
                entity_id: character_id,
                movie_id,
            }
            .into())
        }
    }

    /// List all movies linked to a character, ordered by name ascending.
    pub async fn list_movies(pool: &SqlitePool, character_id: DbId) -> DbResult<Vec<Movie>> {
        let movies = sqlx::query_as::<_, Movie>(
            "SELECT m.id, m.name, m.created_at, m.updated_at
             FROM character_movies cm
             JOIN movies m ON m.id = cm.movie_id
             WHERE cm.character_id = ?
             ORDER BY m.name ASC",
        )
        .bind(character_id)
        .fetch_all(pool)
        .await?;
        Ok(movies)
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Fail with `NotFound` unless `character_id` resolves to an existing character.
async fn ensure_character_exists(pool: &SqlitePool, character_id: DbId) -> DbResult<()> {
    let exists =
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM characters WHERE id = ?)")
            .bind(character_id)
            .fetch_one(pool)
            .await?;
    if exists {
        Ok(())
    } else {
        Err(CoreError::NotFound {
            entity: "Character",
            id: character_id,
        }
        .into())
    }
}

/// Fail with `NotFound` unless `movie_id` resolves to an existing movie.
async fn ensure_movie_exists(pool: &SqlitePool, movie_id: DbId) -> DbResult<()> {
    let exists = sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM movies WHERE id = ?)")
        .bind(movie_id)
        .fetch_one(pool)
        .await?;
    if exists {
        Ok(())
    } else {
        Err(CoreError::NotFound {
            entity: "Movie",
            id: movie_id,
        }
        .into())
    }
}
