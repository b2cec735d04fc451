// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! # Constants Module
//!
//! Strava endpoint URLs and request defaults.

/// Base URL for all Strava v3 resource endpoints
pub const STRAVA_API_BASE: &str = "https://www.strava.com/api/v3";

/// OAuth token endpoint for refresh-token exchange
pub const STRAVA_TOKEN_URL: &str = "https://www.strava.com/oauth/token";

/// Default number of activities per page
pub const DEFAULT_PER_PAGE: u32 = 30;

/// Default activity page number
pub const DEFAULT_PAGE: u32 = 1;

/// Maximum activities per page accepted by Strava. The API rejects larger
/// values server-side; the client does not enforce it locally.
pub const MAX_PER_PAGE: u32 = 200;

/// Stream kinds requested when the caller does not name any
pub const DEFAULT_STREAM_TYPES: [&str; 8] = [
    "latlng",
    "distance",
    "altitude",
    "time",
    "velocity_smooth",
    "heartrate",
    "cadence",
    "watts",
];
