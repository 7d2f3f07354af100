//! Login and registration against the credentials resource.

use store::{KeyValueStore, Session};

use super::forms::{FormErrors, LoginForm, RegisterForm};
use super::password::hash_password;
use crate::client::CredentialsApi;
use crate::models::{Credential, NewCredential};

/// Result of submitting the login form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoginOutcome {
    /// The form failed validation; nothing was fetched.
    Invalid(FormErrors),
    /// A record matched and the session flag now holds this username.
    SignedIn(String),
    /// No record matched, or the credentials could not be fetched.
    Rejected,
}

/// Result of submitting the registration form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RegisterOutcome {
    /// The form failed validation; nothing was fetched.
    Invalid(FormErrors),
    /// The username is already in use; nothing was posted.
    AlreadyExists,
    /// The account was created.
    Registered,
    /// Fetching credentials, hashing, or the POST failed.
    Failed,
}

/// Validate `form`, fetch every credential record and sign in on an exact match.
///
/// Fetch failures are logged and reported as [`LoginOutcome::Rejected`], the
/// same as a wrong password.
pub async fn login<C, S>(api: &C, session: &Session<S>, form: &LoginForm) -> LoginOutcome
where
    C: CredentialsApi,
    S: KeyValueStore,
{
    if let Err(errors) = form.check() {
        return LoginOutcome::Invalid(errors);
    }

    let records = match api.list_credentials().await {
        Ok(records) => records,
        Err(e) => {
            tracing::error!("Failed to fetch credentials: {}", e);
            Vec::new()
        }
    };

    match Credential::find_match(&records, &form.username, &form.password) {
        Some(record) => {
            session.sign_in(&record.username);
            tracing::info!("Signed in as {}", record.username);
            LoginOutcome::SignedIn(record.username.clone())
        }
        None => {
            tracing::debug!("No credential matched {}", form.username);
            LoginOutcome::Rejected
        }
    }
}

/// Validate `form`, refuse duplicates, then post a hashed credential.
pub async fn register<C>(api: &C, form: &RegisterForm) -> RegisterOutcome
where
    C: CredentialsApi,
{
    if let Err(errors) = form.check() {
        return RegisterOutcome::Invalid(errors);
    }

    let records = match api.list_credentials().await {
        Ok(records) => records,
        Err(e) => {
            tracing::error!("Failed to fetch credentials: {}", e);
            return RegisterOutcome::Failed;
        }
    };

    if Credential::username_taken(&records, &form.username) {
        return RegisterOutcome::AlreadyExists;
    }

    let password = match hash_password(&form.password) {
        Ok(hash) => hash,
        Err(e) => {
            tracing::error!("{}", e);
            return RegisterOutcome::Failed;
        }
    };

    let credential = NewCredential {
        username: form.username.clone(),
        password,
    };
    match api.create_credential(&credential).await {
        Ok(()) => {
            tracing::info!("Registered {}", credential.username);
            RegisterOutcome::Registered
        }
        Err(e) => {
            tracing::error!("Failed to register {}: {}", credential.username, e);
            RegisterOutcome::Failed
        }
    }
}
