//! Server settings: built-in defaults, an optional `notes.toml`, then `NOTES_*`
//! environment variables (`NOTES_DATABASE__URL`, `NOTES_SERVER__PORT`, ...).

use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Database {
    pub url: String,
    /// Pool size. In-memory databases only live as long as their connection,
    /// so they must use a single one.
    pub connections: u32,
}

impl Database {
    pub fn is_memory(&self) -> bool {
        self.url.contains(":memory:") || self.url.contains("mode=memory")
    }
}

impl Default for Database {
    fn default() -> Self {
        Self {
            url: "sqlite://notes.db".into(),
            connections: 5,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Server {
    pub host: String,
    pub port: u16,
}

impl Server {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for Server {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".into(),
            port: 8000,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Session {
    /// Only send the session cookie over HTTPS.
    pub secure: bool,
    /// Days of inactivity after which a session expires.
    pub days: i64,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            secure: false,
            days: 14,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct Settings {
    pub database: Database,
    pub server: Server,
    pub session: Session,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let defaults = Settings::default();
        let config = Config::builder()
            .set_default("database.url", defaults.database.url)?
            .set_default("database.connections", defaults.database.connections)?
            .set_default("server.host", defaults.server.host)?
            .set_default("server.port", defaults.server.port)?
            .set_default("session.secure", defaults.session.secure)?
            .set_default("session.days", defaults.session.days)?
            .add_source(
                File::with_name("notes.toml")
                    .format(FileFormat::Toml)
                    .required(false),
            )
            .add_source(
                Environment::with_prefix("NOTES")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }

    /// Settings for a throwaway in-memory database.
    pub fn in_memory() -> Self {
        Self {
            database: Database {
                url: "sqlite::memory:".into(),
                connections: 1,
            },
            ..Self::default()
        }
    }
}
