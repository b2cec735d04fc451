// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Refresh-token exchange against the Strava OAuth token endpoint.
//!
//! The provider caches the access token in memory for the life of the
//! process. Expiry is not tracked and a rejected token is never refreshed
//! mid-session; every authenticated call reuses the first token obtained.

use reqwest::Client;
use serde::Deserialize;
use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::error::{Error, Result};

/// OAuth application credentials plus the athlete's refresh token
#[derive(Debug, Clone)]
pub struct Credentials {
    pub client_id: String,
    pub client_secret: String,
    pub refresh_token: String,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

/// Exchanges a refresh token for a bearer access token, at most once
pub struct TokenProvider {
    credentials: Credentials,
    token_url: String,
    access_token: Mutex<Option<String>>,
}

impl TokenProvider {
    pub fn new(credentials: Credentials, token_url: impl Into<String>) -> Self {
        Self {
            credentials,
            token_url: token_url.into(),
            access_token: Mutex::new(None),
        }
    }

    /// Returns the cached access token, exchanging the refresh token for a
    /// new one on first use. Non-2xx token responses fail with the remote
    /// status and body; a response body without an `access_token` field
    /// fails as a JSON error.
    pub async fn ensure_token(&self, http: &Client) -> Result<String> {
        let mut cached = self.access_token.lock().await;
        if let Some(token) = cached.as_ref() {
            debug!("Reusing cached access token");
            return Ok(token.clone());
        }

        let params = [
            ("client_id", self.credentials.client_id.as_str()),
            ("client_secret", self.credentials.client_secret.as_str()),
            ("refresh_token", self.credentials.refresh_token.as_str()),
            ("grant_type", "refresh_token"),
        ];

        let response = http.post(&self.token_url).form(&params).send().await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(Error::Http { status, body });
        }

        let token: TokenResponse = serde_json::from_str(&body)?;
        info!("Access token obtained from refresh token");

        *cached = Some(token.access_token.clone());
        Ok(token.access_token)
    }
}
