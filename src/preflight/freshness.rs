//! Recommended-installer-version lookup.

use std::time::Duration;

use crate::error::{CanopyError, Result};
use crate::version::SemanticVersion;

/// Request timeout for the version endpoint. A hung lookup is treated
/// exactly like any other fetch failure.
const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Fetch the server's recommended installer version.
///
/// The endpoint returns a bare version string as the response body. Any
/// transport failure, non-2xx status, or unparsable body is a
/// [`CanopyError::RemoteCheck`]; an ambiguous network state must never
/// read as "up to date".
pub fn fetch_recommended_version(server_url: &str) -> Result<SemanticVersion> {
    let url = format!("{}/installer/version", server_url.trim_end_matches('/'));

    let client = reqwest::blocking::Client::builder()
        .user_agent(concat!("canopy/", env!("CARGO_PKG_VERSION")))
        .timeout(FETCH_TIMEOUT)
        .build()
        .map_err(|e| remote_err(&url, e.to_string()))?;

    let response = client
        .get(&url)
        .send()
        .map_err(|e| remote_err(&url, e.to_string()))?;

    if !response.status().is_success() {
        return Err(remote_err(&url, format!("HTTP {}", response.status())));
    }

    let body = response
        .text()
        .map_err(|e| remote_err(&url, e.to_string()))?;

    body.trim()
        .parse()
        .map_err(|_| remote_err(&url, format!("unexpected response body '{}'", body.trim())))
}

fn remote_err(url: &str, message: String) -> CanopyError {
    CanopyError::RemoteCheck {
        url: url.to_string(),
        message,
    }
}
