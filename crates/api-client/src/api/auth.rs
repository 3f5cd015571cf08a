use super::ApiClient;
use reqwest::Method;
use shared_types::{AppError, LoginRequest, LoginResponse, Session, GENERIC_FAILURE};

const LOGIN_PATH: &str = "/api/employees/login";

impl ApiClient {
    /// Authenticate an employee and build the session for them.
    ///
    /// The session email is the one typed here, not anything echoed back by
    /// the server.
    #[tracing::instrument(skip(self, password))]
    pub async fn login(&self, email: &str, password: &str) -> Result<Session, AppError> {
        let body = LoginRequest {
            email: email.trim().to_string(),
            password: password.to_string(),
        };
        // Login is the one request that never carries an identity header.
        let request = self
            .http
            .request(Method::POST, self.url(LOGIN_PATH))
            .json(&body);
        let response = self.execute(request, GENERIC_FAILURE).await?;
        let login: LoginResponse = response.json().await.map_err(|e| {
            tracing::error!(error = %e, "Undecodable login response");
            AppError::transport(format!("Unexpected response from server: {e}"))
        })?;

        tracing::info!(role = %login.role, "Employee signed in");
        Ok(Session::from_login(login, body.email))
    }
}
