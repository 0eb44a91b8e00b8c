use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard};

use chrono::Utc;
use uuid::Uuid;

use crate::models::{NewNote, Note, NoteFields};
use crate::repo::{NoteStore, StoreError};

#[derive(Debug, Default)]
struct Inner {
    notes: BTreeMap<i64, Note>,
    next_id: i64,
}

/// In-memory NoteStore for testing.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    inner: Arc<Mutex<Inner>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        // A panic while holding the lock cannot leave a half-written note behind.
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Inner {
    fn slug_owner(&self, slug: &str) -> Option<i64> {
        self.notes.values().find(|n| n.slug == slug).map(|n| n.id)
    }
}

impl NoteStore for MemoryStore {
    async fn count(&self) -> Result<usize, StoreError> {
        Ok(self.lock().notes.len())
    }

    async fn list_by_author(&self, author_id: Uuid) -> Result<Vec<Note>, StoreError> {
        Ok(self
            .lock()
            .notes
            .values()
            .filter(|n| n.is_authored_by(author_id))
            .cloned()
            .collect())
    }

    async fn get_by_author(&self, author_id: Uuid, slug: &str) -> Result<Option<Note>, StoreError> {
        Ok(self
            .lock()
            .notes
            .values()
            .find(|n| n.slug == slug && n.is_authored_by(author_id))
            .cloned())
    }

    async fn slug_taken(&self, slug: &str, exclude: Option<i64>) -> Result<bool, StoreError> {
        Ok(self
            .lock()
            .slug_owner(slug)
            .is_some_and(|id| Some(id) != exclude))
    }

    async fn insert(&self, note: NewNote) -> Result<Note, StoreError> {
        let mut inner = self.lock();
        if inner.slug_owner(&note.fields.slug).is_some() {
            return Err(StoreError::SlugTaken(note.fields.slug));
        }
        inner.next_id += 1;
        let NoteFields { title, text, slug } = note.fields;
        let note = Note {
            id: inner.next_id,
            title,
            text,
            slug,
            author_id: note.author_id,
            created_at: Utc::now(),
        };
        inner.notes.insert(note.id, note.clone());
        Ok(note)
    }

    async fn update(&self, id: i64, fields: NoteFields) -> Result<Note, StoreError> {
        let mut inner = self.lock();
        if inner.slug_owner(&fields.slug).is_some_and(|owner| owner != id) {
            return Err(StoreError::SlugTaken(fields.slug));
        }
        let Some(note) = inner.notes.get_mut(&id) else {
            return Err(StoreError::backend(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("note {id} does not exist"),
            )));
        };
        note.title = fields.title;
        note.text = fields.text;
        note.slug = fields.slug;
        Ok(note.clone())
    }

    async fn delete(&self, id: i64) -> Result<bool, StoreError> {
        Ok(self.lock().notes.remove(&id).is_some())
    }
}
