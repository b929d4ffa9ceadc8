//! HTTP access to the writer backend.
//!
//! Only the endpoint the client needs at start-up lives here: loading the
//! profile that belongs to a bearer token.

use http::StatusCode;
use thiserror::Error;

use crate::types::User;

const CURRENT_USER_PATH: &str = "/auth/users/me";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("no token to authenticate with")]
    MissingToken,
    #[error("token rejected by the server")]
    Unauthorized,
    #[error("unexpected response status {0}")]
    Status(u16),
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Maps a response status to the error the caller should see, if any.
pub(crate) fn check_status(status: StatusCode) -> Result<(), ApiError> {
    if status == StatusCode::UNAUTHORIZED {
        Err(ApiError::Unauthorized)
    } else if status.is_success() {
        Ok(())
    } else {
        Err(ApiError::Status(status.as_u16()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    /// `origin` is the page origin (`https://host:port`), `api_base` the path
    /// prefix of the API. Either may carry a trailing slash.
    #[must_use]
    pub fn new(origin: &str, api_base: &str) -> Self {
        let origin = origin.trim_end_matches('/');
        let api_base = api_base.trim_matches('/');
        let base_url = if api_base.is_empty() {
            origin.to_owned()
        } else {
            format!("{origin}/{api_base}")
        };
        Self { base_url }
    }

    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    pub async fn current_user(&self, token: &str) -> Result<User, ApiError> {
        let response = reqwest::Client::new()
            .get(self.endpoint(CURRENT_USER_PATH))
            .bearer_auth(token)
            .send()
            .await?;
        check_status(response.status())?;
        Ok(response.json::<User>().await?)
    }
}
