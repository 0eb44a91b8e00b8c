use dioxus::prelude::*;

use super::{field, non_field_errors, text_input, Page};
use crate::auth::{LoginForm, SignupForm};
use crate::urls;

pub fn login(login_form: &LoginForm) -> Page {
    let errors = &login_form.errors;
    let username = text_input("username", "text", &login_form.username);
    let password = text_input("password", "password", "");
    let next = login_form.next.clone();
    let signup = urls::SIGNUP;
    Page::new(
        "Log in",
        None,
        rsx! {
            form { method: "post",
                {non_field_errors(errors)}
                {field("Username", "username", username, errors)}
                {field("Password", "password", password, errors)}
                input { r#type: "hidden", name: "next", value: "{next}" }
                button { r#type: "submit", "Log in" }
            }
            p { "No account yet? " a { href: "{signup}", "Sign up" } }
        },
    )
    .with_context(login_form.clone())
}

pub fn signup(signup_form: &SignupForm) -> Page {
    let errors = &signup_form.errors;
    let username = text_input("username", "text", &signup_form.username);
    let password1 = text_input("password1", "password", "");
    let password2 = text_input("password2", "password", "");
    let login = urls::LOGIN;
    Page::new(
        "Sign up",
        None,
        rsx! {
            form { method: "post",
                {non_field_errors(errors)}
                {field("Username", "username", username, errors)}
                {field("Password", "password1", password1, errors)}
                {field("Password confirmation", "password2", password2, errors)}
                button { r#type: "submit", "Sign up" }
            }
            p { "Already registered? " a { href: "{login}", "Log in" } }
        },
    )
    .with_context(signup_form.clone())
}

pub fn logged_out() -> Page {
    let login = urls::LOGIN;
    Page::new(
        "Logged out",
        None,
        rsx! {
            p { "You have been logged out. " a { href: "{login}", "Log in again" } }
        },
    )
}
