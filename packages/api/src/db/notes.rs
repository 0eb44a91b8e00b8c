//! SQL-backed [`NoteStore`].

use chrono::Utc;
use sqlx::SqlitePool;
use store::{NewNote, Note, NoteFields, NoteStore, StoreError};
use uuid::Uuid;

/// Notes stored in the `notes` table.
#[derive(Clone, Debug)]
pub struct SqlNoteStore {
    pool: SqlitePool,
}

impl SqlNoteStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

/// Map a failed write, turning a violated slug constraint into [`StoreError::SlugTaken`].
fn write_error(err: sqlx::Error, slug: &str) -> StoreError {
    match &err {
        sqlx::Error::Database(db) if db.is_unique_violation() => {
            StoreError::SlugTaken(slug.to_string())
        }
        _ => StoreError::backend(err),
    }
}

impl NoteStore for SqlNoteStore {
    async fn count(&self) -> Result<usize, StoreError> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM notes")
            .fetch_one(&self.pool)
            .await
            .map_err(StoreError::backend)?;
        Ok(count.try_into().unwrap_or_default())
    }

    async fn list_by_author(&self, author_id: Uuid) -> Result<Vec<Note>, StoreError> {
        sqlx::query_as("SELECT * FROM notes WHERE author_id = ? ORDER BY id")
            .bind(author_id)
            .fetch_all(&self.pool)
            .await
            .map_err(StoreError::backend)
    }

    async fn get_by_author(&self, author_id: Uuid, slug: &str) -> Result<Option<Note>, StoreError> {
        sqlx::query_as("SELECT * FROM notes WHERE author_id = ? AND slug = ?")
            .bind(author_id)
            .bind(slug)
            .fetch_optional(&self.pool)
            .await
            .map_err(StoreError::backend)
    }

    async fn slug_taken(&self, slug: &str, exclude: Option<i64>) -> Result<bool, StoreError> {
        let found: Option<(i64,)> =
            sqlx::query_as("SELECT id FROM notes WHERE slug = ? AND id IS NOT ?")
                .bind(slug)
                .bind(exclude)
                .fetch_optional(&self.pool)
                .await
                .map_err(StoreError::backend)?;
        Ok(found.is_some())
    }

    async fn insert(&self, note: NewNote) -> Result<Note, StoreError> {
        sqlx::query_as(
            "INSERT INTO notes (title, text, slug, author_id, created_at) VALUES (?, ?, ?, ?, ?) RETURNING *",
        )
        .bind(&note.fields.title)
        .bind(&note.fields.text)
        .bind(&note.fields.slug)
        .bind(note.author_id)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| write_error(e, &note.fields.slug))
    }

    async fn update(&self, id: i64, fields: NoteFields) -> Result<Note, StoreError> {
        sqlx::query_as("UPDATE notes SET title = ?, text = ?, slug = ? WHERE id = ? RETURNING *")
            .bind(&fields.title)
            .bind(&fields.text)
            .bind(&fields.slug)
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| write_error(e, &fields.slug))
    }

    async fn delete(&self, id: i64) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM notes WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(StoreError::backend)?;
        Ok(result.rows_affected() > 0)
    }
}
