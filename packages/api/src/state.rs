use std::sync::Arc;

use sqlx::SqlitePool;
use store::NoteRepository;

use crate::db::SqlNoteStore;
use crate::settings::Settings;

/// Shared by every handler.
#[derive(Clone, Debug)]
pub struct AppState {
    pub pool: SqlitePool,
    pub notes: NoteRepository<SqlNoteStore>,
    pub settings: Arc<Settings>,
}

impl AppState {
    pub fn new(pool: SqlitePool, settings: Settings) -> Self {
        Self {
            notes: NoteRepository::new(SqlNoteStore::new(pool.clone())),
            pool,
            settings: Arc::new(settings),
        }
    }
}
