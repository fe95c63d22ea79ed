pub mod scores;

pub use scores::ScoreStore;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;
use std::time::Duration;

/// SQL executed at startup; the only schema management this service does.
const CREATE_SCORES_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS "Game1" (
    userid        TEXT PRIMARY KEY,
    highscore_p   INTEGER NOT NULL,
    highscore_a   INTEGER NOT NULL,
    highscore_gdp INTEGER NOT NULL
)
"#;

/// Open (or create) the SQLite database behind the given URL
///
/// Creates the scores table on first run.
pub async fn open_database(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    tracing::info!("Opening database at: {}", database_url);

    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .busy_timeout(Duration::from_secs(5));

    // SQLite cannot create missing parent directories itself
    let db_file = options.clone().get_filename().to_path_buf();
    if let Some(parent) = db_file.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent).map_err(|e| {
                tracing::error!("Failed to create database directory: {}", e);
                sqlx::Error::Io(e)
            })?;
        }
    }

    // A single connection sidesteps "database is locked" errors from SQLite's
    // limited write concurrency.
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .acquire_timeout(Duration::from_secs(10))
        .connect_with(options)
        .await?;

    sqlx::query(CREATE_SCORES_TABLE).execute(&pool).await?;

    tracing::info!("Database initialized successfully");

    Ok(pool)
}
