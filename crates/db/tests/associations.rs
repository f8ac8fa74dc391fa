//! Integration tests for the actor-movie and character-movie associations.
//!
//! - Idempotent linking
//! - Unlinking and the errors for missing links
//! - NotFound for unresolvable endpoint IDs
//! - Reverse reads from both sides

use assert_matches::assert_matches;
use catalog_core::error::CoreError;
use catalog_db::models::actor::CreateActor;
use catalog_db::models::character::CreateCharacter;
use catalog_db::models::movie::CreateMovie;
use catalog_db::repositories::{ActorRepo, CharacterRepo, MovieRepo};
use catalog_db::DbError;
use sqlx::SqlitePool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_movie(name: &str) -> CreateMovie {
    CreateMovie {
        name: name.to_string(),
    }
}

fn new_actor(name: &str) -> CreateActor {
    CreateActor {
        name: name.to_string(),
    }
}

fn new_character(name: &str) -> CreateCharacter {
    CreateCharacter {
        name: name.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Test: Linking is idempotent
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_add_movie_is_idempotent(pool: SqlitePool) {
    let movie = MovieRepo::create(&pool, &new_movie("Casablanca"))
        .await
        .unwrap();
    let actor = ActorRepo::create(&pool, &new_actor("Humphrey Bogart"))
        .await
        .unwrap();

    let first = ActorRepo::add_movie(&pool, actor.id, movie.id).await.unwrap();
    assert!(first, "first link should report an insert");

    let second = ActorRepo::add_movie(&pool, actor.id, movie.id).await.unwrap();
    assert!(!second, "second link should be a no-op");

    let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM actor_movies")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count.0, 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_character_add_movie_is_idempotent(pool: SqlitePool) {
    let movie = MovieRepo::create(&pool, &new_movie("Casablanca"))
        .await
        .unwrap();
    let character = CharacterRepo::create(&pool, &new_character("Rick Blaine"))
        .await
        .unwrap();

    assert!(CharacterRepo::add_movie(&pool, character.id, movie.id)
        .await
        .unwrap());
    assert!(!CharacterRepo::add_movie(&pool, character.id, movie.id)
        .await
        .unwrap());
}

// ---------------------------------------------------------------------------
// Test: Unlinking
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_remove_movie_unlinks(pool: SqlitePool) {
    let movie = MovieRepo::create(&pool, &new_movie("Jaws")).await.unwrap();
    let actor = ActorRepo::create(&pool, &new_actor("Roy Scheider"))
        .await
        .unwrap();
    ActorRepo::add_movie(&pool, actor.id, movie.id).await.unwrap();

    ActorRepo::remove_movie(&pool, actor.id, movie.id)
        .await
        .unwrap();

    assert!(ActorRepo::list_movies(&pool, actor.id)
        .await
        .unwrap()
        .is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_remove_missing_association_fails(pool: SqlitePool) {
    let movie = MovieRepo::create(&pool, &new_movie("Jaws")).await.unwrap();
    let actor = ActorRepo::create(&pool, &new_actor("Roy Scheider"))
        .await
        .unwrap();

    // Never linked: both endpoints exist but the pair does not.
    let err = ActorRepo::remove_movie(&pool, actor.id, movie.id)
        .await
        .unwrap_err();
    assert_matches!(err, DbError::Core(CoreError::AssociationNotFound { .. }));

    // Linked then unlinked: second removal fails the same way.
    ActorRepo::add_movie(&pool, actor.id, movie.id).await.unwrap();
    ActorRepo::remove_movie(&pool, actor.id, movie.id)
        .await
        .unwrap();
    let err = ActorRepo::remove_movie(&pool, actor.id, movie.id)
        .await
        .unwrap_err();
    assert_matches!(err, DbError::Core(CoreError::AssociationNotFound { .. }));
}

// ---------------------------------------------------------------------------
// Test: Unresolvable endpoint IDs
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_add_movie_rejects_unresolvable_ids(pool: SqlitePool) {
    let movie = MovieRepo::create(&pool, &new_movie("Rocky")).await.unwrap();
    let actor = ActorRepo::create(&pool, &new_actor("Sylvester Stallone"))
        .await
        .unwrap();

    let err = ActorRepo::add_movie(&pool, 999_999, movie.id)
        .await
        .unwrap_err();
    assert_matches!(err, DbError::Core(CoreError::NotFound { entity: "Actor", .. }));

    let err = ActorRepo::add_movie(&pool, actor.id, 999_999)
        .await
        .unwrap_err();
    assert_matches!(err, DbError::Core(CoreError::NotFound { entity: "Movie", .. }));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_remove_movie_rejects_unresolvable_ids(pool: SqlitePool) {
    let movie = MovieRepo::create(&pool, &new_movie("Rocky")).await.unwrap();
    let character = CharacterRepo::create(&pool, &new_character("Rocky Balboa"))
        .await
        .unwrap();

    let err = CharacterRepo::remove_movie(&pool, 999_999, movie.id)
        .await
        .unwrap_err();
    assert_matches!(
        err,
        DbError::Core(CoreError::NotFound {
            entity: "Character",
            ..
        })
    );

    let err = CharacterRepo::remove_movie(&pool, character.id, 999_999)
        .await
        .unwrap_err();
    assert_matches!(err, DbError::Core(CoreError::NotFound { entity: "Movie", .. }));
}

// ---------------------------------------------------------------------------
// Test: Reverse reads
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_reverse_reads_from_both_sides(pool: SqlitePool) {
    let heat = MovieRepo::create(&pool, &new_movie("Heat")).await.unwrap();
    let serpico = MovieRepo::create(&pool, &new_movie("Serpico"))
        .await
        .unwrap();
    let pacino = ActorRepo::create(&pool, &new_actor("Al Pacino"))
        .await
        .unwrap();
    let de_niro = ActorRepo::create(&pool, &new_actor("Robert De Niro"))
        .await
        .unwrap();

    ActorRepo::add_movie(&pool, pacino.id, heat.id).await.unwrap();
    ActorRepo::add_movie(&pool, pacino.id, serpico.id)
        .await
        .unwrap();
    ActorRepo::add_movie(&pool, de_niro.id, heat.id).await.unwrap();

    // Actor side: movies ordered by name.
    let movies = ActorRepo::list_movies(&pool, pacino.id).await.unwrap();
    assert_eq!(movies.len(), 2);
    assert_eq!(movies[0].name, "Heat");
    assert_eq!(movies[1].name, "Serpico");

    // Movie side: actors ordered by name.
    let actors = MovieRepo::list_actors(&pool, heat.id).await.unwrap();
    assert_eq!(actors.len(), 2);
    assert_eq!(actors[0].name, "Al Pacino");
    assert_eq!(actors[1].name, "Robert De Niro");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_character_reverse_reads(pool: SqlitePool) {
    let movie = MovieRepo::create(&pool, &new_movie("The Godfather"))
        .await
        .unwrap();
    let michael = CharacterRepo::create(&pool, &new_character("Michael Corleone"))
        .await
        .unwrap();
    let vito = CharacterRepo::create(&pool, &new_character("Vito Corleone"))
        .await
        .unwrap();

    CharacterRepo::add_movie(&pool, michael.id, movie.id)
        .await
        .unwrap();
    CharacterRepo::add_movie(&pool, vito.id, movie.id)
        .await
        .unwrap();

    let characters = MovieRepo::list_characters(&pool, movie.id).await.unwrap();
    assert_eq!(characters.len(), 2);
    assert_eq!(characters[0].name, "Michael Corleone");
    assert_eq!(characters[1].name, "Vito Corleone");

    let movies = CharacterRepo::list_movies(&pool, michael.id).await.unwrap();
    assert_eq!(movies.len(), 1);
    assert_eq!(movies[0].name, "The Godfather");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_reverse_reads_empty_when_unlinked(pool: SqlitePool) {
    let actor = ActorRepo::create(&pool, &new_actor("Extra"))
        .await
        .unwrap();
    assert!(ActorRepo::list_movies(&pool, actor.id)
        .await
        .unwrap()
        .is_empty());

    // Unresolvable IDs read as empty too; reads are not error channels.
    assert!(MovieRepo::list_actors(&pool, 999_999)
        .await
        .unwrap()
        .is_empty());
    assert!(MovieRepo::list_characters(&pool, 999_999)
        .await
        .unwrap()
        .is_empty());
}
