// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! # Strava Client
//!
//! A minimal async client for the Strava v3 REST API. The client exposes the
//! read endpoints for the authenticated athlete (profile, activities, activity
//! detail, activity streams, athlete statistics) and returns the decoded JSON
//! payloads unmodified as `serde_json::Value`.
//!
//! ## Features
//!
//! - **Refresh-token auth**: exchanges a long-lived refresh token for a bearer
//!   access token on first use and reuses it for the process lifetime
//! - **JSON pass-through**: responses are surfaced exactly as Strava returns
//!   them, with no local schema imposed
//! - **Typed errors**: transport failures, non-2xx statuses (with body), and
//!   malformed JSON are distinct error variants
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use strava_client::client::StravaClient;
//! use strava_client::config::Config;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     // Load credentials from config file or environment
//!     let config = Config::load(None)?;
//!     let client = StravaClient::new(config.into_credentials());
//!
//!     // Get athlete data
//!     let athlete = client.get_athlete().await?;
//!     println!("Athlete: {}", athlete["username"]);
//!
//!     // List the latest activities
//!     let activities = client.get_activities(Some(10), None).await?;
//!     for activity in &activities {
//!         println!("{}", strava_client::summary::format_activity_summary(activity));
//!     }
//!
//!     Ok(())
//! }
//! ```

/// Refresh-token exchange and access-token caching
pub mod auth;

/// The Strava API client
pub mod client;

/// Credential configuration loading and persistence
pub mod config;

/// API endpoints and request defaults
pub mod constants;

/// Error types for client operations
pub mod error;

/// Structured logging configuration
pub mod logging;

/// Console formatting of activity summaries
pub mod summary;
