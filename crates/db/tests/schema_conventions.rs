use catalog_db::models::actor::CreateActor;
use catalog_db::models::movie::CreateMovie;
use catalog_db::repositories::{ActorRepo, MovieRepo};
use sqlx::SqlitePool;

/// Names of all user tables, excluding sqlx bookkeeping and SQLite internals.
async fn user_tables(pool: &SqlitePool) -> Vec<String> {
    let rows: Vec<(String,)> = sqlx::query_as(
        "SELECT name FROM sqlite_master
         WHERE type = 'table'
           AND name NOT LIKE 'sqlite_%'
           AND name != '_sqlx_migrations'
         ORDER BY name",
    )
    .fetch_all(pool)
    .await
    .unwrap();
    rows.into_iter().map(|(name,)| name).collect()
}

/// Every table must have created_at and updated_at columns.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_all_tables_have_timestamps(pool: SqlitePool) {
    let tables = user_tables(&pool).await;
    assert!(!tables.is_empty(), "Expected at least one user table");

    for table in &tables {
        for col in ["created_at", "updated_at"] {
            let exists: (bool,) = sqlx::query_as(&format!(
                "SELECT EXISTS(
                    SELECT 1 FROM pragma_table_info('{table}') WHERE name = '{col}'
                 )"
            ))
            .fetch_one(&pool)
            .await
            .unwrap();
            assert!(exists.0, "Table {table} is missing column {col}");
        }
    }
}

/// No VARCHAR columns should exist. TEXT is preferred; length limits live
/// in application code.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_no_varchar_columns(pool: SqlitePool) {
    for table in user_tables(&pool).await {
        let rows: Vec<(String, String)> = sqlx::query_as(&format!(
            "SELECT name, type FROM pragma_table_info('{table}')
             WHERE type LIKE 'VARCHAR%'"
        ))
        .fetch_all(&pool)
        .await
        .unwrap();
        assert!(
            rows.is_empty(),
            "Found VARCHAR columns in {table} (should use TEXT): {:?}",
            rows
        );
    }
}

/// Every foreign key column must have a corresponding index.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_all_fks_have_indexes(pool: SqlitePool) {
    for table in user_tables(&pool).await {
        let fk_columns: Vec<(String,)> = sqlx::query_as(&format!(
            "SELECT \"from\" FROM pragma_foreign_key_list('{table}')"
        ))
        .fetch_all(&pool)
        .await
        .unwrap();

        for (column,) in &fk_columns {
            // An index counts if the FK column is its leading column.
            let has_index: (bool,) = sqlx::query_as(&format!(
                "SELECT EXISTS(
                    SELECT 1
                    FROM pragma_index_list('{table}') AS il,
                         pragma_index_info(il.name) AS ii
                    WHERE ii.seqno = 0 AND ii.name = '{column}'
                 )"
            ))
            .fetch_one(&pool)
            .await
            .unwrap();

            assert!(has_index.0, "FK column {table}.{column} has no index");
        }
    }
}

/// Every foreign key must carry an explicit ON DELETE rule.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_all_fks_have_on_delete_rules(pool: SqlitePool) {
    let mut fk_count = 0;

    for table in user_tables(&pool).await {
        let fk_rules: Vec<(String, String)> = sqlx::query_as(&format!(
            "SELECT \"from\", on_delete FROM pragma_foreign_key_list('{table}')"
        ))
        .fetch_all(&pool)
        .await
        .unwrap();

        for (column, on_delete) in &fk_rules {
            fk_count += 1;
            assert_ne!(
                on_delete, "NO ACTION",
                "FK {table}.{column} has default NO ACTION; specify an explicit rule"
            );
        }
    }

    assert!(fk_count > 0, "Expected at least one FK constraint in the schema");
}

/// Foreign-key enforcement must be on for pool connections. The cascade
/// behaviour this schema relies on is inert without it.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_foreign_keys_pragma_enabled(pool: SqlitePool) {
    let (enabled,): (i64,) = sqlx::query_as("PRAGMA foreign_keys")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(enabled, 1, "PRAGMA foreign_keys should be on");
}

/// The join-table pair constraints reject duplicates at the schema level,
/// independent of the repository's idempotent insert.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_join_pair_unique_constraints(pool: SqlitePool) {
    let movie = MovieRepo::create(
        &pool,
        &CreateMovie {
            name: "Duplicate Target".to_string(),
        },
    )
    .await
    .unwrap();
    let actor = ActorRepo::create(
        &pool,
        &CreateActor {
            name: "Duplicate Source".to_string(),
        },
    )
    .await
    .unwrap();

    sqlx::query("INSERT INTO actor_movies (actor_id, movie_id) VALUES (?, ?)")
        .bind(actor.id)
        .bind(movie.id)
        .execute(&pool)
        .await
        .unwrap();

    let result = sqlx::query("INSERT INTO actor_movies (actor_id, movie_id) VALUES (?, ?)")
        .bind(actor.id)
        .bind(movie.id)
        .execute(&pool)
        .await;
    assert!(result.is_err(), "Duplicate (actor_id, movie_id) should fail");
}
