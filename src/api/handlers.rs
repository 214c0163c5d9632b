use actix_web::{web, HttpResponse, Responder};
use tracing::{debug, info, instrument, warn};

use crate::api::models::{AppState, HealthStatus, ParseRequest, ReconstructRequest, ReconstructResponse};
use crate::url_parser::{parse_url, reconstruct_url};

/// HTTP handler for decomposition requests
///
/// Responds with the component list on success. A rejected URL yields
/// `400 Bad Request` with the same body shape: empty `parts` and the error
/// message.
#[instrument(skip(request), fields(url = %request.url))]
pub async fn parse_handler(request: web::Json<ParseRequest>) -> impl Responder {
    debug!("Received parse request");

    let result = parse_url(&request.url);
    match &result.error {
        Some(error) => {
            warn!("Rejected URL: {} - {}", request.url, error);
            HttpResponse::BadRequest().json(&result)
        }
        None => {
            info!("Parsed URL into {} components", result.parts.len());
            HttpResponse::Ok().json(&result)
        }
    }
}

/// HTTP handler that rebuilds a URL from an edited component list
#[instrument(skip(request), fields(parts = request.parts.len()))]
pub async fn reconstruct_handler(request: web::Json<ReconstructRequest>) -> impl Responder {
    let url = reconstruct_url(&request.parts);
    debug!("Reconstructed URL: {}", url);
    HttpResponse::Ok().json(ReconstructResponse { url })
}

/// Health check endpoint for monitoring service status
#[instrument(skip(state))]
pub async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let uptime_secs = state.started_at.elapsed().as_secs();
    debug!("Health check: uptime={}s", uptime_secs);
    HttpResponse::Ok().json(HealthStatus {
        status: "healthy".to_string(),
        uptime_secs,
    })
}
