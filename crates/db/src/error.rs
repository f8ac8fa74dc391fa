use catalog_core::error::CoreError;

/// Error type for every repository operation.
///
/// Wraps [`CoreError`] for domain failures (validation, unresolvable ids
/// on the association endpoints) and [`sqlx::Error`] for store failures.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    /// A domain-level error from `catalog_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Convenience type alias for repository return values.
pub type DbResult<T> = Result<T, DbError>;
