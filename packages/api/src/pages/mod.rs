//! # Pages: server-rendered HTML
//!
//! Every page is built with `rsx!` and rendered to a string right away with
//! `dioxus-ssr`, so no virtual DOM outlives the function that built it.
//!
//! A [`Page`] also carries its *context*: the typed values the markup was
//! rendered from (the [`store::NoteForm`] of the add page, the
//! [`store::Note`] of the detail page, ...). They travel with the response as
//! extensions, so callers and tests can inspect what a page was rendered with
//! without scraping HTML.

pub mod errors;
pub mod notes;
pub mod users;

use axum::http::Extensions;
use axum::response::{Html, IntoResponse, Response};
use dioxus::prelude::*;
use store::FormErrors;

use crate::models::UserInfo;
use crate::urls;

/// A rendered HTML page plus the context it was rendered from.
#[derive(Debug)]
pub struct Page {
    html: String,
    context: Extensions,
}

impl Page {
    /// Wrap `content` in the site layout and render it.
    pub fn new(title: &str, user: Option<&UserInfo>, content: Element) -> Self {
        Self {
            html: layout(title, user, content),
            context: Extensions::new(),
        }
    }

    /// Attach a context value, retrievable from the response extensions.
    pub fn with_context<T: Clone + Send + Sync + 'static>(mut self, value: T) -> Self {
        self.context.insert(value);
        self
    }

    pub fn context<T: Clone + Send + Sync + 'static>(&self) -> Option<&T> {
        self.context.get::<T>()
    }

    pub fn html(&self) -> &str {
        &self.html
    }
}

impl IntoResponse for Page {
    fn into_response(self) -> Response {
        let mut response = Html(self.html).into_response();
        response.extensions_mut().extend(self.context);
        response
    }
}

fn layout(title: &str, user: Option<&UserInfo>, content: Element) -> String {
    let logged_in = user.is_some();
    let username = user.map(|u| u.username.clone()).unwrap_or_default();
    let (home, add, list, login, logout, signup) = (
        urls::HOME,
        urls::ADD,
        urls::LIST,
        urls::LOGIN,
        urls::LOGOUT,
        urls::SIGNUP,
    );

    let page = rsx! {
        head {
            meta { charset: "utf-8" }
            title { "{title} | Notes" }
        }
        body {
            header {
                nav {
                    a { href: "{home}", "Notes" }
                    if logged_in {
                        a { href: "{add}", "Add note" }
                        a { href: "{list}", "My notes" }
                        span { class: "user", "{username}" }
                        form { action: "{logout}", method: "post",
                            button { r#type: "submit", "Log out" }
                        }
                    } else {
                        a { href: "{login}", "Log in" }
                        a { href: "{signup}", "Sign up" }
                    }
                }
            }
            main {
                h1 { "{title}" }
                {content}
            }
        }
    };
    format!(
        "<!DOCTYPE html><html lang=\"ru\">{}</html>",
        dioxus_ssr::render_element(page)
    )
}

/// A labelled form row with its validation errors underneath.
fn field(label: &str, name: &str, input: Element, errors: &FormErrors) -> Element {
    let id = format!("id_{name}");
    let errors = errors.field(name).to_vec();
    rsx! {
        p {
            label { r#for: "{id}", "{label}" }
            {input}
            if !errors.is_empty() {
                ul { class: "errorlist",
                    for error in errors {
                        li { "{error}" }
                    }
                }
            }
        }
    }
}

/// Errors that belong to the form as a whole.
fn non_field_errors(errors: &FormErrors) -> Element {
    let errors = errors.non_field().to_vec();
    rsx! {
        if !errors.is_empty() {
            ul { class: "errorlist nonfield",
                for error in errors {
                    li { "{error}" }
                }
            }
        }
    }
}

fn text_input(name: &str, input_type: &str, value: &str) -> Element {
    let id = format!("id_{name}");
    rsx! {
        input { r#type: "{input_type}", id: "{id}", name: "{name}", value: "{value}" }
    }
}
