//! Login and signup forms.

use serde::{Deserialize, Serialize};
use store::forms::{FormErrors, NON_FIELD_ERRORS, REQUIRED};

pub const INVALID_LOGIN: &str =
    "Please enter a correct username and password. Note that both fields may be case-sensitive.";
pub const INVALID_USERNAME: &str = "Enter a valid username. This value may contain only letters, numbers, and @/./+/-/_ characters.";
pub const USERNAME_TAKEN: &str = "A user with that username already exists.";
pub const PASSWORD_MISMATCH: &str = "The two password fields didn’t match.";
pub const PASSWORD_TOO_SHORT: &str =
    "This password is too short. It must contain at least 8 characters.";

pub const USERNAME_MAX_LENGTH: usize = 150;
pub const PASSWORD_MIN_LENGTH: usize = 8;

fn is_valid_username(username: &str) -> bool {
    username.chars().count() <= USERNAME_MAX_LENGTH
        && username
            .chars()
            .all(|c| c.is_alphanumeric() || matches!(c, '@' | '.' | '+' | '-' | '_'))
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoginFields {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
    /// Where to go after logging in.
    #[serde(default)]
    pub next: String,
}

/// The login page form. Passwords are never echoed back.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LoginForm {
    pub username: String,
    pub next: String,
    pub errors: FormErrors,
}

impl LoginForm {
    pub fn new(next: Option<String>) -> Self {
        Self {
            next: next.unwrap_or_default(),
            ..Self::default()
        }
    }

    /// Check that both fields are present. Returns the trimmed username.
    pub fn clean(fields: &LoginFields) -> Result<String, Self> {
        let mut form = Self {
            username: fields.username.trim().to_string(),
            next: fields.next.clone(),
            errors: FormErrors::default(),
        };
        if form.username.is_empty() {
            form.errors.add("username", REQUIRED);
        }
        if fields.password.is_empty() {
            form.errors.add("password", REQUIRED);
        }
        if form.errors.is_empty() {
            Ok(form.username)
        } else {
            Err(form)
        }
    }

    /// The credentials did not match any account.
    pub fn rejected(fields: &LoginFields) -> Self {
        let mut form = Self {
            username: fields.username.trim().to_string(),
            next: fields.next.clone(),
            errors: FormErrors::default(),
        };
        form.errors.add(NON_FIELD_ERRORS, INVALID_LOGIN);
        form
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SignupFields {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password1: String,
    #[serde(default)]
    pub password2: String,
}

/// The signup page form.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SignupForm {
    pub username: String,
    pub errors: FormErrors,
}

impl SignupForm {
    /// Validate the fields on their own. Returns `(username, password)`;
    /// whether the username is free is up to the caller.
    pub fn clean(fields: &SignupFields) -> Result<(String, String), Self> {
        let mut form = Self {
            username: fields.username.trim().to_string(),
            errors: FormErrors::default(),
        };
        if form.username.is_empty() {
            form.errors.add("username", REQUIRED);
        } else if !is_valid_username(&form.username) {
            form.errors.add("username", INVALID_USERNAME);
        }
        if fields.password1.is_empty() {
            form.errors.add("password1", REQUIRED);
        }
        if fields.password2.is_empty() {
            form.errors.add("password2", REQUIRED);
        } else if fields.password1 != fields.password2 {
            form.errors.add("password2", PASSWORD_MISMATCH);
        } else if fields.password2.chars().count() < PASSWORD_MIN_LENGTH {
            form.errors.add("password2", PASSWORD_TOO_SHORT);
        }
        if form.errors.is_empty() {
            Ok((form.username, fields.password1.clone()))
        } else {
            Err(form)
        }
    }

    pub fn username_taken(username: &str) -> Self {
        let mut form = Self {
            username: username.to_string(),
            errors: FormErrors::default(),
        };
        form.errors.add("username", USERNAME_TAKEN);
        form
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signup(username: &str, password1: &str, password2: &str) -> SignupFields {
        SignupFields {
            username: username.into(),
            password1: password1.into(),
            password2: password2.into(),
        }
    }

    #[test]
    fn test_login_requires_both_fields() {
        let form = LoginForm::clean(&LoginFields::default()).unwrap_err();
        assert_eq!(form.errors.field("username"), [REQUIRED]);
        assert_eq!(form.errors.field("password"), [REQUIRED]);
    }

    #[test]
    fn test_login_clean() {
        let fields = LoginFields {
            username: " Вася ".into(),
            password: "secret".into(),
            next: "/notes/".into(),
        };
        assert_eq!(LoginForm::clean(&fields).unwrap(), "Вася");
        let rejected = LoginForm::rejected(&fields);
        assert_eq!(rejected.errors.non_field(), [INVALID_LOGIN]);
        assert_eq!(rejected.next, "/notes/");
    }

    #[test]
    fn test_signup_clean() {
        let (username, password) =
            SignupForm::clean(&signup(" Кун_Цю ", "long enough", "long enough")).unwrap();
        assert_eq!(username, "Кун_Цю");
        assert_eq!(password, "long enough");
    }

    #[test]
    fn test_signup_errors() {
        let form = SignupForm::clean(&signup("bad/name", "password1", "password2")).unwrap_err();
        assert_eq!(form.errors.field("username"), [INVALID_USERNAME]);
        assert_eq!(form.errors.field("password2"), [PASSWORD_MISMATCH]);

        let form = SignupForm::clean(&signup("ok", "short", "short")).unwrap_err();
        assert_eq!(form.errors.field("password2"), [PASSWORD_TOO_SHORT]);
    }

    #[test]
    fn test_username_rules() {
        assert!(is_valid_username("user.name+tag@host-1_x"));
        assert!(is_valid_username("Морихэй"));
        assert!(!is_valid_username("with space"));
        assert!(!is_valid_username(&"u".repeat(USERNAME_MAX_LENGTH + 1)));
    }
}
