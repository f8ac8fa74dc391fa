use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Association not found: {entity} {entity_id} is not linked to movie {movie_id}")]
    AssociationNotFound {
        entity: &'static str,
        entity_id: DbId,
        movie_id: DbId,
    },

    #[error("Validation failed: {0}")]
    Validation(String),
}
