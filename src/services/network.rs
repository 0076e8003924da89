//! Public IP lookup for the dashboard header
//!
//! A single best-effort request; any failure yields [`FALLBACK_IP`].

use std::time::Duration;

use tracing::debug;

use crate::config::IpLookupSettings;

/// Address shown when the lookup is disabled or fails
pub const FALLBACK_IP: &str = "127.0.0.1";

/// Fetch the public address, falling back to [`FALLBACK_IP`]
pub fn lookup_public_ip(settings: &IpLookupSettings) -> String {
    if !settings.enabled {
        return FALLBACK_IP.to_string();
    }

    match fetch(&settings.url, Duration::from_secs(settings.timeout_secs)) {
        Ok(ip) => ip,
        Err(e) => {
            debug!(url = %settings.url, error = %e, "public IP lookup failed");
            FALLBACK_IP.to_string()
        }
    }
}

fn fetch(url: &str, timeout: Duration) -> Result<String, String> {
    let client = reqwest::blocking::Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| e.to_string())?;

    let body = client
        .get(url)
        .send()
        .and_then(|response| response.error_for_status())
        .and_then(|response| response.text())
        .map_err(|e| e.to_string())?;

    let ip = body.trim();
    if ip.is_empty() || ip.len() > 64 || ip.contains(char::is_whitespace) {
        return Err(format!("unexpected response body: {:?}", body));
    }
    Ok(ip.to_string())
}
