/// Database configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct DbConfig {
    /// Connection URL (default: `sqlite://catalog.db`).
    pub database_url: String,
    /// Maximum pool size (default: `20`).
    pub max_connections: u32,
}

impl DbConfig {
    /// Load configuration from environment variables with defaults,
    /// reading a `.env` file first if one exists.
    ///
    /// | Env Var                    | Default               |
    /// |----------------------------|-----------------------|
    /// | `DATABASE_URL`             | `sqlite://catalog.db` |
    /// | `DATABASE_MAX_CONNECTIONS` | `20`                  |
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let database_url =
            std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://catalog.db".into());

        let max_connections: u32 = std::env::var("DATABASE_MAX_CONNECTIONS")
            .unwrap_or_else(|_| "20".into())
            .parse()
            .expect("DATABASE_MAX_CONNECTIONS must be a valid u32");

        Self {
            database_url,
            max_connections,
        }
    }
}
