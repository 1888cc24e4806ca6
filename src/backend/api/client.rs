//! HTTP client for the alumni site's auth endpoints.

use super::models::{CheckAuthResponse, LoginCredentials, LoginResponse, ReadUserResponse};
use crate::backend::config::ApiConfig;
use crate::utils::{AuthError, Result};
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use std::time::Duration;

const LOGIN_PATH: &str = "auth/login";
const LOGOUT_PATH: &str = "auth/logout";
const CHECK_AUTH_PATH: &str = "auth/check-auth";
const READ_USER_PATH: &str = "users/me";

/// Remote side of the auth state.
pub trait AuthApi: Clone + 'static {
    async fn login(&self, credentials: &LoginCredentials) -> Result<LoginResponse>;
    async fn logout(&self) -> Result<()>;
    async fn check_auth(&self) -> Result<CheckAuthResponse>;
    async fn read_user(&self) -> Result<ReadUserResponse>;
}

/// `AuthApi` over HTTP. The session lives in the client's cookie store,
/// so clones share one session.
#[derive(Clone, Debug)]
pub struct HttpAuthApi {
    client: Client,
    base_url: String,
}

impl HttpAuthApi {
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let client = Client::builder()
            .cookie_store(true)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Sends the request and returns the body of a 2xx reply.
    async fn send_raw(&self, request: RequestBuilder) -> Result<String> {
        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            log::debug!("Auth API replied {status}: {body}");
            return Err(AuthError::from_reply(status.as_u16(), &body));
        }
        Ok(body)
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T> {
        let body = self.send_raw(request).await?;
        Ok(serde_json::from_str(&body)?)
    }
}

impl AuthApi for HttpAuthApi {
    async fn login(&self, credentials: &LoginCredentials) -> Result<LoginResponse> {
        log::debug!("Logging in as {}", credentials.email);
        let reply: LoginResponse = self
            .send(self.client.post(self.url(LOGIN_PATH)).json(credentials))
            .await?;

        if reply.success == Some(false) {
            let message = reply
                .message
                .unwrap_or_else(|| "Login failed".to_string());
            return Err(AuthError::from_message(message));
        }
        Ok(reply)
    }

    async fn logout(&self) -> Result<()> {
        self.send_raw(self.client.post(self.url(LOGOUT_PATH)))
            .await
            .map(|_| ())
    }

    async fn check_auth(&self) -> Result<CheckAuthResponse> {
        self.send(self.client.get(self.url(CHECK_AUTH_PATH))).await
    }

    async fn read_user(&self) -> Result<ReadUserResponse> {
        self.send(self.client.get(self.url(READ_USER_PATH))).await
    }
}
