//! # Note form: validation of submitted note data
//!
//! A [`NoteForm`] pairs the values a page starts out with (`initial`) with the
//! values the user submitted (`data`). Validation happens in two steps:
//!
//! 1. [`NoteForm::clean`] checks each field on its own and fills in a missing
//!    slug from the title.
//! 2. [`crate::NoteRepository`] checks the cleaned slug against the store and
//!    reports a collision as `"{slug}{WARNING}"` on the `slug` field.
//!
//! A rejected form keeps its `initial` values, so an edit page re-rendered after
//! a collision still knows the note's current slug.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::models::{Note, NoteFields, SLUG_MAX_LENGTH, TITLE_MAX_LENGTH};
use crate::slug::{is_valid_slug, slugify};

/// Appended to a slug that already belongs to another note.
pub const WARNING: &str = " - такой slug уже существует, придумайте уникальное значение!";

pub const REQUIRED: &str = "This field is required.";
pub const INVALID_SLUG: &str =
    "Enter a valid “slug” consisting of letters, numbers, underscores or hyphens.";

/// Key under which errors not tied to a single field are collected.
pub const NON_FIELD_ERRORS: &str = "__all__";

fn too_long(max: usize, actual: usize) -> String {
    format!("Ensure this value has at most {max} characters (it has {actual}).")
}

/// Field name to error messages.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct FormErrors(BTreeMap<String, Vec<String>>);

impl FormErrors {
    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.0.entry(field.to_string()).or_default().push(message.into());
    }

    /// Errors for one field, empty when it is valid.
    pub fn field(&self, field: &str) -> &[String] {
        self.0.get(field).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn non_field(&self) -> &[String] {
        self.field(NON_FIELD_ERRORS)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// The form behind the add and edit pages.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct NoteForm {
    /// Values the form was created with; the note's current fields when editing.
    pub initial: NoteFields,
    /// Submitted values, `None` until the form is bound.
    pub data: Option<NoteFields>,
    pub errors: FormErrors,
}

impl NoteForm {
    /// An empty form for creating a note.
    pub fn unbound() -> Self {
        Self::default()
    }

    /// A form pre-filled with an existing note.
    pub fn for_note(note: &Note) -> Self {
        Self {
            initial: note.fields(),
            ..Self::default()
        }
    }

    /// Attach submitted data. Previous errors are discarded.
    pub fn bind(mut self, data: NoteFields) -> Self {
        self.data = Some(data);
        self.errors = FormErrors::default();
        self
    }

    pub fn is_bound(&self) -> bool {
        self.data.is_some()
    }

    /// Values to show in the rendered inputs: submitted data when bound,
    /// otherwise the initial values.
    pub fn values(&self) -> &NoteFields {
        self.data.as_ref().unwrap_or(&self.initial)
    }

    /// Validate each field and return the normalized values.
    ///
    /// Returns `None` and records the reasons in [`NoteForm::errors`] when any
    /// field is invalid. An unbound form is never valid.
    pub fn clean(&mut self) -> Option<NoteFields> {
        let Some(data) = self.data.clone() else {
            return None;
        };

        let title = data.title.trim().to_string();
        let title_len = title.chars().count();
        if title.is_empty() {
            self.errors.add("title", REQUIRED);
        } else if title_len > TITLE_MAX_LENGTH {
            self.errors.add("title", too_long(TITLE_MAX_LENGTH, title_len));
        }

        if data.text.trim().is_empty() {
            self.errors.add("text", REQUIRED);
        }

        let mut slug = data.slug.trim().to_string();
        let slug_len = slug.chars().count();
        if slug.is_empty() {
            slug = slugify(&title);
        } else if slug_len > SLUG_MAX_LENGTH {
            self.errors.add("slug", too_long(SLUG_MAX_LENGTH, slug_len));
        } else if !is_valid_slug(&slug) {
            self.errors.add("slug", INVALID_SLUG);
        }
        // A title made only of punctuation leaves nothing to build a slug from.
        if slug.is_empty() && !title.is_empty() {
            self.errors.add("slug", REQUIRED);
        }

        if !self.errors.is_empty() {
            return None;
        }
        Some(NoteFields {
            title,
            text: data.text,
            slug,
        })
    }

    /// Record that `slug` already belongs to another note.
    pub fn reject_slug(&mut self, slug: &str) {
        self.errors.add("slug", format!("{slug}{WARNING}"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bound(title: &str, text: &str, slug: &str) -> NoteForm {
        NoteForm::unbound().bind(NoteFields::new(title, text, slug))
    }

    #[test]
    fn test_unbound_form_is_invalid() {
        let mut form = NoteForm::unbound();
        assert!(!form.is_bound());
        assert!(form.clean().is_none());
        assert!(form.errors.is_empty());
    }

    #[test]
    fn test_clean_valid() {
        let mut form = bound(" Заголовок ", "Текст", "slug_one");
        let cleaned = form.clean().unwrap();
        assert_eq!(cleaned, NoteFields::new("Заголовок", "Текст", "slug_one"));
        assert!(form.errors.is_empty());
    }

    #[test]
    fn test_clean_fills_empty_slug_from_title() {
        let mut form = bound("Заголовок", "Текст", "");
        let cleaned = form.clean().unwrap();
        assert_eq!(cleaned.slug, slugify("Заголовок"));
    }

    #[test]
    fn test_clean_required_fields() {
        let mut form = bound("", "  ", "");
        assert!(form.clean().is_none());
        assert_eq!(form.errors.field("title"), [REQUIRED]);
        assert_eq!(form.errors.field("text"), [REQUIRED]);
        assert!(form.errors.field("slug").is_empty());
    }

    #[test]
    fn test_clean_rejects_bad_slug() {
        let mut form = bound("Title", "Text", "no spaces allowed");
        assert!(form.clean().is_none());
        assert_eq!(form.errors.field("slug"), [INVALID_SLUG]);
    }

    #[test]
    fn test_clean_rejects_long_values() {
        let long = "x".repeat(101);
        let mut form = bound(&long, "Text", &long);
        assert!(form.clean().is_none());
        assert_eq!(form.errors.field("title").len(), 1);
        assert_eq!(form.errors.field("slug").len(), 1);
        assert!(form.errors.field("title")[0].contains("it has 101"));
    }

    #[test]
    fn test_reject_slug_message() {
        let mut form = bound("Title", "Text", "taken");
        form.reject_slug("taken");
        assert_eq!(form.errors.field("slug"), [format!("taken{WARNING}")]);
    }

    #[test]
    fn test_bind_keeps_initial() {
        let initial = NoteFields::new("Old", "Body", "old_slug");
        let form = NoteForm {
            initial: initial.clone(),
            ..NoteForm::default()
        }
        .bind(NoteFields::new("New", "Body", "new_slug"));
        assert_eq!(form.initial, initial);
        assert_eq!(form.values().slug, "new_slug");
    }
}
