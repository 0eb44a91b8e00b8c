//! # Domain models for notes
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`Note`] | A persisted note row: title, body text, globally unique slug, owning author and creation time. |
//! | [`NoteFields`] | The user-editable part of a note, exactly as submitted by the note form. |
//! | [`NewNote`] | Validated fields plus the author, ready to be inserted by a [`crate::NoteStore`]. |
//!
//! Authors are referenced by their user id only; the user record itself lives in
//! the server crate.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Maximum length of a note title, in characters.
pub const TITLE_MAX_LENGTH: usize = 100;
/// Maximum length of a note slug, in characters.
pub const SLUG_MAX_LENGTH: usize = 100;

/// A note owned by a single author.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Note {
    pub id: i64,
    pub title: String,
    pub text: String,
    /// Unique across all notes, not only within one author's notes.
    pub slug: String,
    pub author_id: Uuid,
    pub created_at: DateTime<Utc>,
}

impl Note {
    /// The editable fields of this note, as the edit form starts out with.
    pub fn fields(&self) -> NoteFields {
        NoteFields {
            title: self.title.clone(),
            text: self.text.clone(),
            slug: self.slug.clone(),
        }
    }

    pub fn is_authored_by(&self, user_id: Uuid) -> bool {
        self.author_id == user_id
    }
}

/// Submitted note form data. Missing fields deserialize as empty strings so
/// they surface as field errors rather than rejected requests.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NoteFields {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub slug: String,
}

impl NoteFields {
    pub fn new(title: impl Into<String>, text: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            text: text.into(),
            slug: slug.into(),
        }
    }
}

/// A validated note waiting to be inserted.
#[derive(Clone, Debug, PartialEq)]
pub struct NewNote {
    pub fields: NoteFields,
    pub author_id: Uuid,
}
