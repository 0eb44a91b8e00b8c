//! Database connection pool.

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

use crate::settings::Database;

/// Open a connection pool for the configured database.
pub async fn connect(database: &Database) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(&database.url)?
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = if database.is_memory() {
        // Every connection sees its own in-memory database, and closing the
        // last one drops it.
        SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
    } else {
        SqlitePoolOptions::new().max_connections(database.connections.max(1))
    };
    pool.connect_with(options).await
}

/// Apply the schema migrations shipped with this crate.
pub async fn migrate(pool: &SqlitePool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
