use dioxus::prelude::*;
use store::{Note, NoteForm};

use super::{field, non_field_errors, text_input, Page};
use crate::models::UserInfo;
use crate::urls;

/// Context of the list page: the user's own notes.
#[derive(Debug, Clone, PartialEq)]
pub struct NoteList(pub Vec<Note>);

pub fn home(user: Option<&UserInfo>) -> Page {
    let intro = "Keep short notes that only you can see.";
    let logged_in = user.is_some();
    let (list, signup) = (urls::LIST, urls::SIGNUP);
    Page::new(
        "Notes",
        user,
        rsx! {
            p { "{intro}" }
            if logged_in {
                p { a { href: "{list}", "Go to your notes" } }
            } else {
                p { a { href: "{signup}", "Create an account" } " to get started." }
            }
        },
    )
}

/// The add page when `editing` is false, the edit page otherwise.
pub fn form(user: Option<&UserInfo>, note_form: &NoteForm, editing: bool) -> Page {
    let title = if editing { "Edit note" } else { "Add note" };
    let values = note_form.values();
    let errors = &note_form.errors;

    let title_input = text_input("title", "text", &values.title);
    let slug_input = text_input("slug", "text", &values.slug);
    let text = values.text.clone();
    let text_area = rsx! {
        textarea { id: "id_text", name: "text", rows: "10", "{text}" }
    };
    let slug_help = "Leave empty to build the slug from the title.";

    Page::new(
        title,
        user,
        rsx! {
            form { method: "post",
                {non_field_errors(errors)}
                {field("Title", "title", title_input, errors)}
                {field("Text", "text", text_area, errors)}
                {field("Slug", "slug", slug_input, errors)}
                p { class: "help", "{slug_help}" }
                button { r#type: "submit", "Save" }
            }
        },
    )
    .with_context(note_form.clone())
}

pub fn detail(user: Option<&UserInfo>, note: &Note) -> Page {
    let (edit, delete) = (urls::edit(&note.slug), urls::delete(&note.slug));
    let created = note.created_at.format("%Y-%m-%d %H:%M").to_string();
    let paragraphs: Vec<String> = note.text.lines().map(str::to_string).collect();
    Page::new(
        &note.title,
        user,
        rsx! {
            article {
                for line in paragraphs {
                    p { "{line}" }
                }
            }
            p { class: "meta", "Created {created}" }
            p {
                a { href: "{edit}", "Edit" }
                " "
                a { href: "{delete}", "Delete" }
            }
        },
    )
    .with_context(note.clone())
}

pub fn delete(user: Option<&UserInfo>, note: &Note) -> Page {
    let title = note.title.clone();
    let back = urls::detail(&note.slug);
    Page::new(
        "Delete note",
        user,
        rsx! {
            p { "Delete “{title}”? This cannot be undone." }
            form { method: "post",
                button { r#type: "submit", "Delete" }
                " "
                a { href: "{back}", "Cancel" }
            }
        },
    )
    .with_context(note.clone())
}

pub fn list(user: Option<&UserInfo>, notes: Vec<Note>) -> Page {
    let rows: Vec<(i64, String, String)> = notes
        .iter()
        .map(|n| (n.id, urls::detail(&n.slug), n.title.clone()))
        .collect();
    let empty = rows.is_empty();
    let add = urls::ADD;
    Page::new(
        "My notes",
        user,
        rsx! {
            if empty {
                p { "No notes yet. " a { href: "{add}", "Write the first one." } }
            } else {
                ol { class: "notes",
                    for (id, href, title) in rows {
                        li { key: "{id}", a { href: "{href}", "{title}" } }
                    }
                }
            }
        },
    )
    .with_context(NoteList(notes))
}

pub fn success(user: Option<&UserInfo>) -> Page {
    let list = urls::LIST;
    Page::new(
        "Done",
        user,
        rsx! {
            p { "The operation completed successfully." }
            p { a { href: "{list}", "Back to your notes" } }
        },
    )
}
