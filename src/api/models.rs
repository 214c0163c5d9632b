use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::url_parser::UrlComponent;

/// Request to decompose a URL
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ParseRequest {
    /// Raw input as typed by the user
    pub url: String,
}

/// Request to rebuild a URL from an edited component list
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ReconstructRequest {
    /// Components as previously returned by /parse, possibly toggled or edited
    pub parts: Vec<UrlComponent>,
}

/// Response for the /reconstruct endpoint
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ReconstructResponse {
    /// The rebuilt URL, empty when nothing is enabled
    pub url: String,
}

/// Health status response for the /health endpoint
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthStatus {
    /// Status indicator, always "healthy" while the server answers
    pub status: String,

    /// Server uptime in seconds
    pub uptime_secs: u64,
}

/// Shared state handed to every handler
#[derive(Debug, Clone)]
pub struct AppState {
    pub started_at: Instant,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            started_at: Instant::now(),
        }
    }
}
