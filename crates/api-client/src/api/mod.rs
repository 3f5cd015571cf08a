mod auth;
mod receipts;
mod resources;

pub use resources::*;

use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use shared_types::{AppError, Session};

/// Identity header sent on every authenticated request.
pub const LOGGED_IN_EMAIL_HEADER: &str = "loggedInEmail";

/// Client for the remote retail API.
///
/// Cheap to clone: clones share one connection pool. A client built with
/// [`ApiClient::new`] is anonymous and only suitable for login; use
/// [`ApiClient::for_session`] for everything else.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    logged_in_email: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
            logged_in_email: None,
        }
    }

    /// A copy of this client that identifies as `email`.
    pub fn with_logged_in_email(&self, email: impl Into<String>) -> Self {
        Self {
            logged_in_email: Some(email.into()),
            ..self.clone()
        }
    }

    pub fn for_session(&self, session: &Session) -> Self {
        self.with_logged_in_email(session.email.clone())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn logged_in_email(&self) -> Option<&str> {
        self.logged_in_email.as_deref()
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self.http.request(method, self.url(path));
        match &self.logged_in_email {
            Some(email) => builder.header(LOGGED_IN_EMAIL_HEADER, email.as_str()),
            None => builder,
        }
    }

    /// Send a request, turning transport failures and non-2xx statuses into
    /// `RemoteRequestFailed`.
    async fn execute(&self, builder: RequestBuilder, fallback: &str) -> Result<Response, AppError> {
        let response = builder.send().await.map_err(|e| {
            tracing::error!(error = %e, "Request to retail API failed");
            AppError::transport(format!("Network error: {e}"))
        })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let err = AppError::from_error_body(status.as_u16(), &body, fallback);
        tracing::warn!(status = status.as_u16(), message = %err.message, "Retail API rejected request");
        Err(err)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str, fallback: &str) -> Result<T, AppError> {
        let response = self.execute(self.request(Method::GET, path), fallback).await?;
        response.json::<T>().await.map_err(|e| {
            tracing::error!(error = %e, path, "Undecodable response body");
            AppError::transport(format!("Unexpected response from server: {e}"))
        })
    }

    /// Send a JSON body. The response body is not required on success.
    async fn send_json<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: &B,
        fallback: &str,
    ) -> Result<(), AppError> {
        self.execute(self.request(method, path).json(body), fallback)
            .await
            .map(|_| ())
    }

    async fn send_empty(&self, method: Method, path: &str, fallback: &str) -> Result<(), AppError> {
        self.execute(self.request(method, path), fallback)
            .await
            .map(|_| ())
    }
}
