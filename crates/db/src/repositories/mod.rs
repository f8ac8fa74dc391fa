//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&SqlitePool` as the first argument. Missing rows surface
//! as `Ok(None)` / `Ok(false)`; the error channel carries validation
//! failures, unresolvable ids on the association endpoints, and store
//! errors.

pub mod actor_repo;
pub mod character_repo;
pub mod framework_repo;
pub mod language_repo;
pub mod movie_repo;
pub mod simple_repo;

pub use actor_repo::ActorRepo;
pub use character_repo::CharacterRepo;
pub use framework_repo::FrameworkRepo;
pub use language_repo::LanguageRepo;
pub use movie_repo::MovieRepo;
pub use simple_repo::SimpleRepo;
