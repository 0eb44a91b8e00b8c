//! Test harness: a fresh in-memory application per test and a cookie-keeping
//! client driving it through `tower::ServiceExt::oneshot`.

#![allow(dead_code)]

use api::auth::hash_password;
use api::{AppState, Settings, User};
use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use store::{NewNote, Note, NoteFields, NoteStore};
use tower::ServiceExt;

pub const PASSWORD: &str = "correct-horse-battery";

pub struct TestApp {
    pub router: Router,
    pub state: AppState,
}

impl TestApp {
    pub async fn new() -> Self {
        let (router, state) = api::setup(Settings::in_memory())
            .await
            .expect("failed to set up the application");
        Self { router, state }
    }

    /// A user whose password is [`PASSWORD`].
    pub async fn create_user(&self, username: &str) -> User {
        let hash = hash_password(PASSWORD).unwrap();
        User::create(username, &hash, &self.state.pool).await.unwrap()
    }

    /// Insert a note directly, skipping form validation.
    pub async fn create_note(&self, author: &User, title: &str, text: &str, slug: &str) -> Note {
        self.state
            .notes
            .store()
            .insert(NewNote {
                fields: NoteFields::new(title, text, slug),
                author_id: author.id,
            })
            .await
            .unwrap()
    }

    pub async fn note_count(&self) -> usize {
        self.state.notes.count().await.unwrap()
    }

    /// An anonymous client.
    pub fn client(&self) -> Client {
        Client {
            router: self.router.clone(),
            cookie: None,
        }
    }

    /// A client that is already logged in as `user`.
    pub async fn client_for(&self, user: &User) -> Client {
        let mut client = self.client();
        client.force_login(user).await;
        client
    }
}

pub struct Client {
    router: Router,
    cookie: Option<String>,
}

impl Client {
    pub async fn get(&mut self, uri: &str) -> Response {
        self.send(Method::GET, uri, Body::empty(), None).await
    }

    pub async fn post(&mut self, uri: &str, form: &[(&str, &str)]) -> Response {
        let body = serde_urlencoded::to_string(form).unwrap();
        self.send(
            Method::POST,
            uri,
            Body::from(body),
            Some("application/x-www-form-urlencoded"),
        )
        .await
    }

    pub async fn post_fields(&mut self, uri: &str, fields: &NoteFields) -> Response {
        self.post(
            uri,
            &[
                ("title", fields.title.as_str()),
                ("text", fields.text.as_str()),
                ("slug", fields.slug.as_str()),
            ],
        )
        .await
    }

    pub async fn delete(&mut self, uri: &str) -> Response {
        self.send(Method::DELETE, uri, Body::empty(), None).await
    }

    pub async fn force_login(&mut self, user: &User) {
        let response = self
            .post(
                api::urls::LOGIN,
                &[("username", user.username.as_str()), ("password", PASSWORD)],
            )
            .await;
        assert_eq!(response.status(), StatusCode::FOUND, "login failed");
        assert!(self.cookie.is_some(), "login did not set a session cookie");
    }

    pub fn is_logged_in(&self) -> bool {
        self.cookie.is_some()
    }

    async fn send(
        &mut self,
        method: Method,
        uri: &str,
        body: Body,
        content_type: Option<&str>,
    ) -> Response {
        let mut request = Request::builder().method(method).uri(uri);
        if let Some(content_type) = content_type {
            request = request.header(header::CONTENT_TYPE, content_type);
        }
        if let Some(cookie) = &self.cookie {
            request = request.header(header::COOKIE, cookie);
        }
        let response = self
            .router
            .clone()
            .oneshot(request.body(body).unwrap())
            .await
            .unwrap();
        self.remember_cookie(&response);
        response
    }

    fn remember_cookie(&mut self, response: &Response) {
        for value in response.headers().get_all(header::SET_COOKIE) {
            let value = value.to_str().unwrap();
            let pair = value.split(';').next().unwrap_or_default().trim();
            let expired = value.contains("Max-Age=0") || pair.ends_with('=');
            self.cookie = if expired { None } else { Some(pair.to_string()) };
        }
    }
}

pub fn assert_redirects(response: &Response, location: &str) {
    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(
        response.headers().get(header::LOCATION).unwrap().to_str().unwrap(),
        location
    );
}

pub async fn body_text(response: Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}
