//! # Repository: note operations on an abstract note store
//!
//! [`NoteRepository`] owns the rules around notes; [`NoteStore`] implementations
//! only move rows in and out of a backend. The server uses a SQL-backed store,
//! tests use [`crate::MemoryStore`].
//!
//! | Method | Description |
//! |--------|-------------|
//! | [`create`](NoteRepository::create) | Validates a bound [`NoteForm`], checks slug uniqueness and inserts the note for an author. |
//! | [`update`](NoteRepository::update) | Same validation, excluding the edited note from the uniqueness check. |
//! | [`delete`](NoteRepository::delete) | Removes a note. |
//! | [`get`](NoteRepository::get) | Looks a note up by slug, only among one author's notes. |
//! | [`list`](NoteRepository::list) | All notes of one author, oldest first. |
//!
//! Lookups are always scoped to the author. A note that exists but belongs to
//! somebody else is indistinguishable from a missing one.

use std::future::Future;

use uuid::Uuid;

use crate::forms::NoteForm;
use crate::models::{NewNote, Note, NoteFields};

/// Failure of a [`NoteStore`] backend.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The backend's uniqueness constraint rejected the slug.
    #[error("slug {0:?} is already taken")]
    SlugTaken(String),
    #[error("note store backend failed: {0}")]
    Backend(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl StoreError {
    pub fn backend(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Backend(Box::new(err))
    }
}

/// Why a note could not be saved.
#[derive(Debug, thiserror::Error)]
pub enum SaveError {
    /// The submitted data is invalid; the form carries the field errors.
    #[error("note form is invalid")]
    Invalid(NoteForm),
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Async storage for note rows.
pub trait NoteStore {
    fn count(&self) -> impl Future<Output = Result<usize, StoreError>> + Send;
    fn list_by_author(
        &self,
        author_id: Uuid,
    ) -> impl Future<Output = Result<Vec<Note>, StoreError>> + Send;
    fn get_by_author(
        &self,
        author_id: Uuid,
        slug: &str,
    ) -> impl Future<Output = Result<Option<Note>, StoreError>> + Send;
    /// Whether any note other than `exclude` uses `slug`.
    fn slug_taken(
        &self,
        slug: &str,
        exclude: Option<i64>,
    ) -> impl Future<Output = Result<bool, StoreError>> + Send;
    fn insert(&self, note: NewNote) -> impl Future<Output = Result<Note, StoreError>> + Send;
    fn update(
        &self,
        id: i64,
        fields: NoteFields,
    ) -> impl Future<Output = Result<Note, StoreError>> + Send;
    /// Returns whether a row was removed.
    fn delete(&self, id: i64) -> impl Future<Output = Result<bool, StoreError>> + Send;
}

/// Note operations on top of a [`NoteStore`].
#[derive(Clone, Debug)]
pub struct NoteRepository<S> {
    store: S,
}

impl<S: NoteStore + Sync> NoteRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub async fn count(&self) -> Result<usize, StoreError> {
        self.store.count().await
    }

    pub async fn list(&self, author_id: Uuid) -> Result<Vec<Note>, StoreError> {
        self.store.list_by_author(author_id).await
    }

    pub async fn get(&self, author_id: Uuid, slug: &str) -> Result<Option<Note>, StoreError> {
        self.store.get_by_author(author_id, slug).await
    }

    /// Create a note owned by `author_id` from a bound form.
    pub async fn create(&self, author_id: Uuid, form: NoteForm) -> Result<Note, SaveError> {
        let (form, fields) = self.validate(form, None).await?;
        let note = NewNote { fields, author_id };
        match self.store.insert(note).await {
            Err(StoreError::SlugTaken(slug)) => Err(Self::collision(form, &slug)),
            other => Ok(other?),
        }
    }

    /// Apply a bound form to an existing note.
    pub async fn update(&self, note: &Note, form: NoteForm) -> Result<Note, SaveError> {
        let (form, fields) = self.validate(form, Some(note.id)).await?;
        match self.store.update(note.id, fields).await {
            Err(StoreError::SlugTaken(slug)) => Err(Self::collision(form, &slug)),
            other => Ok(other?),
        }
    }

    pub async fn delete(&self, note: &Note) -> Result<bool, StoreError> {
        self.store.delete(note.id).await
    }

    async fn validate(
        &self,
        mut form: NoteForm,
        exclude: Option<i64>,
    ) -> Result<(NoteForm, NoteFields), SaveError> {
        let Some(fields) = form.clean() else {
            return Err(SaveError::Invalid(form));
        };
        if self.store.slug_taken(&fields.slug, exclude).await? {
            return Err(Self::collision(form, &fields.slug));
        }
        Ok((form, fields))
    }

    fn collision(mut form: NoteForm, slug: &str) -> SaveError {
        form.reject_slug(slug);
        SaveError::Invalid(form)
    }
}
