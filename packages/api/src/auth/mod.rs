//! Client-side authentication: form schemas, password hashing, and the
//! login/registration flows.

mod flow;
mod forms;
mod password;

pub use flow::{login, register, LoginOutcome, RegisterOutcome};
pub use forms::{is_complex, FormErrors, LoginForm, RegisterForm, SPECIAL_CHARACTERS};
pub use password::{hash_password, verify_password, PasswordError};
