//! URL names and paths.
//!
//! Route patterns (`*_ROUTE`) are what the router matches; the functions build
//! concrete paths for links and redirects. [`reverse`] resolves a route by its
//! `namespace:name`.

pub const HOME: &str = "/";
pub const ADD: &str = "/add/";
pub const LIST: &str = "/notes/";
pub const SUCCESS: &str = "/done/";
pub const LOGIN: &str = "/auth/login/";
pub const LOGOUT: &str = "/auth/logout/";
pub const SIGNUP: &str = "/auth/signup/";

pub const EDIT_ROUTE: &str = "/edit/{slug}/";
pub const DETAIL_ROUTE: &str = "/note/{slug}/";
pub const DELETE_ROUTE: &str = "/delete/{slug}/";

pub fn edit(slug: &str) -> String {
    format!("/edit/{slug}/")
}

pub fn detail(slug: &str) -> String {
    format!("/note/{slug}/")
}

pub fn delete(slug: &str) -> String {
    format!("/delete/{slug}/")
}

/// Resolve a named route. Returns `None` for unknown names or a wrong number
/// of arguments.
pub fn reverse(name: &str, args: &[&str]) -> Option<String> {
    let path = match (name, args) {
        ("notes:home", []) => HOME.to_string(),
        ("notes:add", []) => ADD.to_string(),
        ("notes:list", []) => LIST.to_string(),
        ("notes:success", []) => SUCCESS.to_string(),
        ("notes:edit", [slug]) => edit(slug),
        ("notes:detail", [slug]) => detail(slug),
        ("notes:delete", [slug]) => delete(slug),
        ("users:login", []) => LOGIN.to_string(),
        ("users:logout", []) => LOGOUT.to_string(),
        ("users:signup", []) => SIGNUP.to_string(),
        _ => return None,
    };
    Some(path)
}

/// The login page, asking it to come back to `next` afterwards.
pub fn login_redirect(next: &str) -> String {
    match serde_urlencoded::to_string(&[("next", next)]) {
        // Slashes stay readable in the query string.
        Ok(query) => format!("{LOGIN}?{}", query.replace("%2F", "/")),
        Err(_) => LOGIN.to_string(),
    }
}

/// Whether `next` is safe to redirect to after logging in: a path on this site.
///
/// Browsers drop tabs and newlines from URLs, so `"/\t/host"` would turn into
/// `//host`. Control characters are rejected outright.
pub fn is_local(next: &str) -> bool {
    if next.chars().any(char::is_control) {
        return false;
    }
    next.starts_with('/') && !next.starts_with("//") && !next.starts_with("/\\")
}
