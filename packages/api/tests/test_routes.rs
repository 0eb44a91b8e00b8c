//! Which pages are reachable by whom: status codes and login redirects.

mod common;

use api::urls::{login_redirect, reverse};
use axum::http::StatusCode;
use common::{assert_redirects, TestApp};

const NOTE_SLUG: &str = "slug_12356789";

async fn app_with_note() -> (TestApp, api::User, api::User) {
    let app = TestApp::new().await;
    let author = app.create_user("Кун Цю").await;
    let reader = app.create_user("Вася").await;
    app.create_note(
        &author,
        "Загаловок",
        "Произвольный текст, наполняющий поле text.",
        NOTE_SLUG,
    )
    .await;
    (app, author, reader)
}

#[tokio::test]
async fn test_pages_availability() {
    let (app, _, _) = app_with_note().await;
    let mut client = app.client();

    for name in ["notes:home", "users:login", "users:logout", "users:signup"] {
        let url = reverse(name, &[]).unwrap();
        let response = client.get(&url).await;
        assert_eq!(response.status(), StatusCode::OK, "{name}");
    }
}

#[tokio::test]
async fn test_redirect_for_anonymous_client() {
    let (app, _, _) = app_with_note().await;
    let mut client = app.client();
    let login_url = reverse("users:login", &[]).unwrap();

    let urls: [(&str, &[&str]); 6] = [
        ("notes:add", &[]),
        ("notes:detail", &["any"]),
        ("notes:list", &[]),
        ("notes:edit", &["any"]),
        ("notes:delete", &["any"]),
        ("notes:success", &[]),
    ];
    for (name, args) in urls {
        let url = reverse(name, args).unwrap();
        let response = client.get(&url).await;
        assert_redirects(&response, &format!("{login_url}?next={url}"));
    }
}

#[tokio::test]
async fn test_redirect_keeps_query_string() {
    let app = TestApp::new().await;
    let response = app.client().get("/notes/?page=2").await;
    assert_redirects(&response, &login_redirect("/notes/?page=2"));
}

#[tokio::test]
async fn test_availability_for_note_detail_edit_delete() {
    let (app, author, reader) = app_with_note().await;

    let users_statuses = [(&author, StatusCode::OK), (&reader, StatusCode::NOT_FOUND)];
    for (user, status) in users_statuses {
        let mut client = app.client_for(user).await;
        for name in ["notes:detail", "notes:edit", "notes:delete"] {
            let url = reverse(name, &[NOTE_SLUG]).unwrap();
            let response = client.get(&url).await;
            assert_eq!(response.status(), status, "{} {name}", user.username);
        }
    }
}

#[tokio::test]
async fn test_authorized_pages_availability() {
    let (app, author, _) = app_with_note().await;
    let mut client = app.client_for(&author).await;

    for name in ["notes:home", "notes:add", "notes:list", "notes:success"] {
        let url = reverse(name, &[]).unwrap();
        let response = client.get(&url).await;
        assert_eq!(response.status(), StatusCode::OK, "{name}");
    }
}

#[tokio::test]
async fn test_missing_note_is_not_found() {
    let (app, author, _) = app_with_note().await;
    let mut client = app.client_for(&author).await;

    let response = client.get(&reverse("notes:detail", &["missing"]).unwrap()).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_unknown_path_is_not_found() {
    let app = TestApp::new().await;
    let response = app.client().get("/no/such/page/").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_logout_ends_the_session() {
    let (app, author, _) = app_with_note().await;
    let mut client = app.client_for(&author).await;

    let response = client.get(&reverse("users:logout", &[]).unwrap()).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(!client.is_logged_in());

    let url = reverse("notes:list", &[]).unwrap();
    let response = client.get(&url).await;
    assert_redirects(&response, &login_redirect(&url));
}
