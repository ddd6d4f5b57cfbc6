use gloo_net::http::Request;
use shared::{AuthClient, AuthError, Credentials, LoginResponse};

/// Talks to the auth endpoint over `fetch`.
pub struct HttpAuthClient {
    login_url: String,
}

impl HttpAuthClient {
    pub fn new(login_url: impl Into<String>) -> Self {
        Self {
            login_url: login_url.into(),
        }
    }
}

impl AuthClient for HttpAuthClient {
    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, AuthError> {
        let resp = Request::post(&self.login_url)
            .json(credentials)
            .map_err(|e| AuthError::transport(format!("Failed to encode request: {}", e)))?
            .send()
            .await
            .map_err(|e| {
                log::error!("Login request error: {}", e);
                AuthError::transport(format!("Request error: {}", e))
            })?;

        // Application failures still carry a code, whatever the HTTP status.
        resp.json::<LoginResponse>().await.map_err(|e| {
            log::error!("Failed to parse login response ({}): {}", resp.status(), e);
            AuthError::transport(format!("Failed to parse response: {}", e))
        })
    }
}

/// Asks the server whether the browser session is authenticated.
pub async fn fetch_logged_in(session_url: &str) -> bool {
    match Request::get(session_url).send().await {
        Ok(resp) => resp.ok(),
        Err(e) => {
            log::warn!("Session check failed: {}", e);
            false
        }
    }
}
