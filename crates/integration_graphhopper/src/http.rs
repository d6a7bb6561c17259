//! Shared request plumbing for the GraphHopper clients

use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::config::GraphHopperConfig;
use crate::error::GraphHopperError;

/// Build the HTTP client used by both GraphHopper clients
pub(crate) fn build_client(config: &GraphHopperConfig) -> Result<Client, GraphHopperError> {
    config
        .validate()
        .map_err(GraphHopperError::ConfigurationError)?;

    Client::builder()
        .timeout(Duration::from_secs(config.timeout_secs))
        .user_agent(concat!("route-planner/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| GraphHopperError::ConfigurationError(e.to_string()))
}

/// Issue a GET request and return the body of a successful response
///
/// Non-success statuses become `UpstreamUnavailable`, including the
/// `message` field GraphHopper puts in its error bodies when present.
pub(crate) async fn get_body(
    client: &Client,
    url: &str,
    params: &[(&str, String)],
    timeout_secs: u64,
) -> Result<String, GraphHopperError> {
    let response = client
        .get(url)
        .query(params)
        .send()
        .await
        .map_err(|e| GraphHopperError::from_transport(&e, timeout_secs))?;

    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| GraphHopperError::from_transport(&e, timeout_secs))?;

    if !status.is_success() {
        debug!(%status, "GraphHopper returned an error status");
        return Err(GraphHopperError::UpstreamUnavailable(
            match error_message(&body) {
                Some(message) => format!("HTTP {status}: {message}"),
                None => format!("HTTP {status}"),
            },
        ));
    }

    Ok(body)
}

fn error_message(body: &str) -> Option<String> {
    serde_json::from_str::<RawErrorBody>(body)
        .ok()
        .and_then(|raw| raw.message)
        .filter(|message| !message.trim().is_empty())
}

#[derive(Debug, Deserialize)]
struct RawErrorBody {
    message: Option<String>,
}
