//! Repository for the `movies` table.

use catalog_core::fields::validate_name;
use catalog_core::types::DbId;
use sqlx::SqlitePool;

use crate::error::DbResult;
use crate::models::actor::Actor;
use crate::models::character::Character;
use crate::models::movie::{CreateMovie, Movie, UpdateMovie};

/// Column list for `movies` queries.
const COLUMNS: &str = "id, name, created_at, updated_at";

/// Provides CRUD operations for movies, plus reads of their cast.
pub struct MovieRepo;

impl MovieRepo {
    /// Insert a new movie, returning the created row.
    pub async fn create(pool: &SqlitePool, input: &CreateMovie) -> DbResult<Movie> {
        validate_name("Movie name", &input.name)?;

        let query = format!(
            "INSERT INTO movies (name)
             VALUES (?)
             RETURNING {COLUMNS}"
        );
        let movie = sqlx::query_as::<_, Movie>(&query)
            .bind(&input.name)
            .fetch_one(pool)
            .await?;
        Ok(movie)
    }

    /// Find a movie by its ID.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> DbResult<Option<Movie>> {
        let query = format!("SELECT {COLUMNS} FROM movies WHERE id = ?");
        let movie = sqlx::query_as::<_, Movie>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(movie)
    }

    /// List all movies, ordered by id ascending.
    pub async fn list(pool: &SqlitePool) -> DbResult<Vec<Movie>> {
        let query = format!("SELECT {COLUMNS} FROM movies ORDER BY id ASC");
        let movies = sqlx::query_as::<_, Movie>(&query).fetch_all(pool).await?;
        Ok(movies)
    }

    /// List all actors linked to a movie, ordered by name ascending.
    ///
    /// A movie with no linked actors yields an empty list, as does an
    /// ID that matches no movie at all.
    pub async fn list_actors(pool: &SqlitePool, movie_id: DbId) -> DbResult<Vec<Actor>> {
        let actors = sqlx::query_as::<_, Actor>(
            "SELECT a.id, a.name, a.created_at, a.updated_at
             FROM actor_movies am
             JOIN actors a ON a.id = am.actor_id
             WHERE am.movie_id = ?
             ORDER BY a.name ASC",
        )
        .bind(movie_id)
        .fetch_all(pool)
        .await?;
        Ok(actors)
    }

    /// List all characters linked to a movie, ordered by name ascending.
    pub async fn list_characters(pool: &SqlitePool, movie_id: DbId) -> DbResult<Vec<Character>> {
        let characters = sqlx::query_as::<_, Character>(
            "SELECT c.id, c.name, c.created_at, c.updated_at
             FROM character_movies cm
             JOIN characters c ON c.id = cm.character_id
             WHERE cm.movie_id = ?
             ORDER BY c.name ASC",
        )
        .bind(movie_id)
        .fetch_all(pool)
        .await?;
        Ok(characters)
    }

    /// Update a movie. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &SqlitePool,
        id: DbId,
        input: &UpdateMovie,
    ) -> DbResult<Option<Movie>> {
        if let Some(name) = &input.name {
            validate_name("Movie name", name)?;
        }

        let query = format!(
            "UPDATE movies SET
                name = COALESCE(?, name),
                updated_at = strftime('%Y-%m-%dT%H:%M:%fZ', 'now')
             WHERE id = ?
             RETURNING {COLUMNS}"
        );
        let movie = sqlx::query_as::<_, Movie>(&query)
            .bind(&input.name)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(movie)
    }

    /// Delete a movie by ID. Returns `true` if a row was deleted.
    ///
    /// Join rows in `actor_movies` and `character_movies` cascade; the
    /// actors and characters themselves are untouched.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> DbResult<bool> {
        let result = sqlx::query("DELETE FROM movies WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
