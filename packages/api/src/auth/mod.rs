//! Authentication: password hashing, session login state and the user forms.

mod forms;
mod password;
mod session;

pub use forms::{
    LoginFields, LoginForm, SignupFields, SignupForm, INVALID_LOGIN, PASSWORD_MISMATCH,
    USERNAME_TAKEN,
};
pub use password::{hash_password, verify_missing_user, verify_password};
pub use session::{login, logout, CurrentUser, MaybeUser, SESSION_USER_ID_KEY};
