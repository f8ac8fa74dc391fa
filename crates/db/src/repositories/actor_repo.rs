//! Repository for the `actors` and `actor_movies` tables.
//!
//! Provides actor CRUD plus the actor side of the actor-movie
//! many-to-many association.

use catalog_core::error::CoreError;
use catalog_core::fields::validate_name;
use catalog_core::types::DbId;
use sqlx::SqlitePool;

use crate::error::DbResult;
use crate::models::actor::{Actor, CreateActor, UpdateActor};
use crate::models::movie::Movie;

/// Column list for `actors` queries.
const COLUMNS: &str = "id, name, created_at, updated_at";

/// Provides CRUD operations for actors and actor-movie associations.
pub struct ActorRepo;

impl ActorRepo {
    // -----------------------------------------------------------------------
    // Actor CRUD
    // -----------------------------------------------------------------------

    /// Insert a new actor, returning the created row.
    pub async fn create(pool: &SqlitePool, input: &CreateActor) -> DbResult<Actor> {
        validate_name("Actor name", &input.name)?;

        let query = format!(
            "INSERT INTO actors (name)
             VALUES (?)
             RETURNING {COLUMNS}"
        );
        let actor = sqlx::query_as::<_, Actor>(&query)
            .bind(&input.name)
            .fetch_one(pool)
            .await?;
        Ok(actor)
    }

    /// Find an actor by its ID.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> DbResult<Option<Actor>> {
        let query = format!("SELECT {COLUMNS} FROM actors WHERE id = ?");
        let actor = sqlx::query_as::<_, Actor>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(actor)
    }

    /// List all actors, ordered by id ascending.
    pub async fn list(pool: &SqlitePool) -> DbResult<Vec<Actor>> {
        let query = format!("SELECT {COLUMNS} FROM actors ORDER BY id ASC");
        let actors = sqlx::query_as::<_, Actor>(&query).fetch_all(pool).await?;
        Ok(actors)
    }

    /// Update an actor. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &SqlitePool,
        id: DbId,
        input: &UpdateActor,
    ) -> DbResult<Option<Actor>> {
        if let Some(name) = &input.name {
            validate_name("Actor name", name)?;
        }

        let query = format!(
            "UPDATE actors SET
                name = COALESCE(?, name),
                updated_at = strftime('%Y-%m-%dT%H:%M:%fZ', 'now')
             WHERE id = ?
             RETURNING {COLUMNS}"
        );
        let actor = sqlx::query_as::<_, Actor>(&query)
            .bind(&input.name)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(actor)
    }

    /// Delete an actor by ID. Returns `true` if a row was deleted.
    ///
    /// Join rows in `actor_movies` cascade; the movies themselves are
    /// untouched.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> DbResult<bool> {
        let result = sqlx::query("DELETE FROM actors WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    // -----------------------------------------------------------------------
    // Movie associations
    // -----------------------------------------------------------------------

    /// Link an actor to a movie. Idempotent: returns `false` if the
    /// link already exists, `true` if it was created.
    ///
    /// Both IDs must resolve; a nonexistent actor or movie fails with
    /// `NotFound`.
    pub async fn add_movie(pool: &SqlitePool, actor_id: DbId, movie_id: DbId) -> DbResult<bool> {
        ensure_actor_exists(pool, actor_id).await?;
        ensure_movie_exists(pool, movie_id).await?;

        let result = sqlx::query(
            "INSERT INTO actor_movies (actor_id, movie_id)
             VALUES (?, ?)
             ON CONFLICT (actor_id, movie_id) DO NOTHING",
        )
        .bind(actor_id)
        .bind(movie_id)
        .execute(pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Unlink an actor from a movie.
    ///
    /// Both IDs must resolve; a nonexistent actor or movie fails with
    /// `NotFound`, and a missing link fails with `AssociationNotFound`.
    pub async fn remove_movie(pool: &SqlitePool, actor_id: DbId, movie_id: DbId) -> DbResult<()> {
        ensure_actor_exists(pool, actor_id).await?;
        ensure_movie_exists(pool, movie_id).await?;

        let result = sqlx::query(
            "DELETE FROM actor_movies
             WHERE actor_id = ? AND movie_id = ?",
        )
        .bind(actor_id)
        .bind(movie_id)
        .execute(pool)
        .await?;

        if result.rows_affected() > 0 {
            Ok(())
        } else {
            Err(CoreError::AssociationNotFound {
                entity: "Actor",
                entity_id: actor_id,
                movie_id,
            }
            .into())
        }
    }

    /// List all movies linked to an actor, ordered by name ascending.
    ///
    /// An actor with no linked movies yields an empty list, as does an
    /// ID that matches no actor at all.
    pub async fn list_movies(pool: &SqlitePool, actor_id: DbId) -> DbResult<Vec<Movie>> {
        let movies = sqlx::query_as::<_, Movie>(
            "SELECT m.id, m.name, m.created_at, m.updated_at
             FROM actor_movies am
             JOIN movies m ON m.id = am.movie_id
             WHERE am.actor_id = ?
             ORDER BY m.name ASC",
        )
        .bind(actor_id)
        .fetch_all(pool)
        .await?;
        Ok(movies)
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Fail with `NotFound` unless `actor_id` resolves to an existing actor.
async fn ensure_actor_exists(pool: &SqlitePool, actor_id: DbId) -> DbResult<()> {
    let exists = sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM actors WHERE id = ?)")
        .bind(actor_id)
        .fetch_one(pool)
        .await?;
    if exists {
        Ok(())
    } else {
        Err(CoreError::NotFound {
            entity: "Actor",
            id: actor_id,
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
