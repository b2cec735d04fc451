// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Configuration loading for Strava credentials

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::auth::Credentials;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub client_id: String,
    pub client_secret: String,
    pub refresh_token: String,
}

impl Config {
    /// Loads credentials from a TOML file, or from `STRAVA_CLIENT_ID`,
    /// `STRAVA_CLIENT_SECRET` and `STRAVA_REFRESH_TOKEN` environment
    /// variables when the file does not exist
    pub fn load(path: Option<String>) -> Result<Self> {
        let config_path = path.unwrap_or_else(default_config_path);

        if Path::new(&config_path).exists() {
            let content = fs::read_to_string(&config_path)
                .context("Failed to read config file")?;
            toml::from_str(&content)
                .context("Failed to parse config file")
        } else {
            dotenv::dotenv().ok();

            let client_id = std::env::var("STRAVA_CLIENT_ID")
                .context("STRAVA_CLIENT_ID not set and no config file found")?;
            let client_secret = std::env::var("STRAVA_CLIENT_SECRET")
                .context("STRAVA_CLIENT_SECRET not set and no config file found")?;
            let refresh_token = std::env::var("STRAVA_REFRESH_TOKEN")
                .context("STRAVA_REFRESH_TOKEN not set and no config file found")?;

            Ok(Config {
                client_id,
                client_secret,
                refresh_token,
            })
        }
    }

    pub fn save(&self, path: Option<String>) -> Result<()> {
        let config_path = path.unwrap_or_else(default_config_path);

        let parent = Path::new(&config_path).parent()
            .context("Invalid config path")?;
        fs::create_dir_all(parent)?;

        let content = toml::to_string_pretty(self)?;
        fs::write(&config_path, content)?;

        Ok(())
    }

    pub fn into_credentials(self) -> Credentials {
        Credentials {
            client_id: self.client_id,
            client_secret: self.client_secret,
            refresh_token: self.refresh_token,
        }
    }
}

fn default_config_path() -> String {
    dirs::config_dir()
        .map(|p| p.join("strava-client/config.toml"))
        .unwrap_or_else(|| "config.toml".into())
        .to_string_lossy()
        .to_string()
}
