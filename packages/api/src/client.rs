//! # Remote API client
//!
//! Two async traits describe the remote resources, so the flows and the notes
//! board can run against either the real HTTP client or [`crate::MemoryApi`]:
//!
//! | Trait | Resource | Verbs |
//! |-------|----------|-------|
//! | [`NotesApi`] | notes | `GET` list, `POST` insert, `PUT` update, `DELETE` remove |
//! | [`CredentialsApi`] | credentials | `GET` list, `POST` create |
//!
//! [`HttpClient`] implements both with `reqwest`. Any non-2xx status is an
//! error; response bodies of mutations are ignored. There is no retry, no
//! backoff and no request deduplication.

use std::future::Future;

use reqwest::{RequestBuilder, Response};
use serde::de::DeserializeOwned;

use crate::config::{ClientConfig, Endpoints};
use crate::error::ApiError;
use crate::models::{Credential, NewCredential, NewNote, Note, NoteRef, NoteUpdate};

/// The notes resource.
pub trait NotesApi {
    fn list_notes(&self) -> impl Future<Output = Result<Vec<Note>, ApiError>>;
    fn insert_note(&self, text: &str) -> impl Future<Output = Result<(), ApiError>>;
    fn update_note(&self, id: i64, text: &str) -> impl Future<Output = Result<(), ApiError>>;
    fn delete_note(&self, id: i64) -> impl Future<Output = Result<(), ApiError>>;
}

/// The credentials resource.
pub trait CredentialsApi {
    fn list_credentials(&self) -> impl Future<Output = Result<Vec<Credential>, ApiError>>;
    fn create_credential(
        &self,
        credential: &NewCredential,
    ) -> impl Future<Output = Result<(), ApiError>>;
}

/// `reqwest`-backed client for both resources.
#[derive(Clone, Debug)]
pub struct HttpClient {
    http: reqwest::Client,
    endpoints: Endpoints,
}

impl HttpClient {
    pub fn new(config: &ClientConfig) -> Result<Self, ApiError> {
        let builder = reqwest::Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = match config.http.timeout_secs {
            0 => builder,
            secs => builder.timeout(std::time::Duration::from_secs(secs)),
        };
        let http = builder.build().map_err(ApiError::Client)?;

        Ok(Self {
            http,
            endpoints: config.endpoints.clone(),
        })
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    async fn send(
        method: &'static str,
        url: &str,
        request: RequestBuilder,
    ) -> Result<Response, ApiError> {
        tracing::debug!("{} {}", method, url);
        let response = request.send().await.map_err(|source| ApiError::Transport {
            method,
            url: url.to_string(),
            source,
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                method,
                url: url.to_string(),
                status: status.as_u16(),
            });
        }
        Ok(response)
    }

    async fn fetch_all<T: DeserializeOwned>(&self, url: &str) -> Result<Vec<T>, ApiError> {
        let response = Self::send("GET", url, self.http.get(url)).await?;
        response.json().await.map_err(|source| ApiError::Decode {
            url: url.to_string(),
            source,
        })
    }
}

impl NotesApi for HttpClient {
    async fn list_notes(&self) -> Result<Vec<Note>, ApiError> {
        self.fetch_all(&self.endpoints.notes).await
    }

    async fn insert_note(&self, text: &str) -> Result<(), ApiError> {
        let url = &self.endpoints.notes;
        Self::send("POST", url, self.http.post(url).json(&NewNote { note: text })).await?;
        Ok(())
    }

    async fn update_note(&self, id: i64, text: &str) -> Result<(), ApiError> {
        let url = &self.endpoints.notes;
        let body = NoteUpdate { id, note: text };
        Self::send("PUT", url, self.http.put(url).json(&body)).await?;
        Ok(())
    }

    async fn delete_note(&self, id: i64) -> Result<(), ApiError> {
        let url = &self.endpoints.notes;
        Self::send("DELETE", url, self.http.delete(url).json(&NoteRef { id })).await?;
        Ok(())
    }
}

impl CredentialsApi for HttpClient {
    async fn list_credentials(&self) -> Result<Vec<Credential>, ApiError> {
        self.fetch_all(&self.endpoints.credentials).await
    }

    async fn create_credential(&self, credential: &NewCredential) -> Result<(), ApiError> {
        let url = &self.endpoints.credentials;
        Self::send("POST", url, self.http.post(url).json(credential)).await?;
        Ok(())
    }
}
