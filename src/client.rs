// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Client for the Strava v3 read endpoints. Each method maps one-to-one to
//! an HTTP GET and returns the decoded JSON payload unmodified.

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use crate::auth::{Credentials, TokenProvider};
use crate::constants::{
    DEFAULT_PAGE, DEFAULT_PER_PAGE, DEFAULT_STREAM_TYPES, STRAVA_API_BASE, STRAVA_TOKEN_URL,
};
use crate::error::{Error, Result};

pub struct StravaClient {
    http: Client,
    api_base: String,
    token_provider: TokenProvider,
}

impl StravaClient {
    /// Creates a client against the production Strava endpoints
    pub fn new(credentials: Credentials) -> Self {
        Self::with_endpoints(credentials, STRAVA_API_BASE, STRAVA_TOKEN_URL)
    }

    /// Creates a client against explicit endpoints, for tests or proxies
    pub fn with_endpoints(
        credentials: Credentials,
        api_base: impl Into<String>,
        token_url: impl Into<String>,
    ) -> Self {
        Self {
            http: Client::new(),
            api_base: api_base.into(),
            token_provider: TokenProvider::new(credentials, token_url),
        }
    }

    /// Gets the authenticated athlete's profile
    pub async fn get_athlete(&self) -> Result<Value> {
        self.get(&format!("{}/athlete", self.api_base), &[]).await
    }

    /// Lists the athlete's activities, most recent first.
    ///
    /// `per_page` defaults to 30; Strava caps it at 200 server-side.
    /// `page` defaults to 1.
    pub async fn get_activities(
        &self,
        per_page: Option<u32>,
        page: Option<u32>,
    ) -> Result<Vec<Value>> {
        let query = [
            ("per_page", per_page.unwrap_or(DEFAULT_PER_PAGE).to_string()),
            ("page", page.unwrap_or(DEFAULT_PAGE).to_string()),
        ];

        self.get(&format!("{}/athlete/activities", self.api_base), &query)
            .await
    }

    /// Gets the detail of a single activity. An unknown or inaccessible id
    /// surfaces as the remote 404.
    pub async fn get_activity_by_id(&self, activity_id: u64) -> Result<Value> {
        self.get(
            &format!("{}/activities/{}", self.api_base, activity_id),
            &[],
        )
        .await
    }

    /// Gets the time-series streams of an activity. When `stream_types` is
    /// `None` the eight default kinds are requested. Each returned stream
    /// carries its `type` and a `data` array of samples.
    pub async fn get_activity_streams(
        &self,
        activity_id: u64,
        stream_types: Option<&[&str]>,
    ) -> Result<Vec<Value>> {
        let types = stream_types
            .unwrap_or(&DEFAULT_STREAM_TYPES)
            .join(",");

        self.get(
            &format!("{}/activities/{}/streams/{}", self.api_base, activity_id, types),
            &[],
        )
        .await
    }

    /// Gets an athlete's aggregate statistics (recent, year-to-date and
    /// all-time totals per sport)
    pub async fn get_athlete_stats(&self, athlete_id: u64) -> Result<Value> {
        self.get(
            &format!("{}/athletes/{}/stats", self.api_base, athlete_id),
            &[],
        )
        .await
    }

    async fn get<T: DeserializeOwned>(&self, url: &str, query: &[(&str, String)]) -> Result<T> {
        let token = self.token_provider.ensure_token(&self.http).await?;

        debug!(url = %url, "GET");
        let response = self
            .http
            .get(url)
            .bearer_auth(&token)
            .query(query)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(Error::Http { status, body });
        }

        Ok(serde_json::from_str(&body)?)
    }
}
