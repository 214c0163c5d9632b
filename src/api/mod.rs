pub mod config;
pub mod handlers;
pub mod models;

use actix_web::{web, App, HttpServer};
use anyhow::Result;
use tracing::{error, info, instrument};

use self::config::ApiConfig;
use self::handlers::{health_check, parse_handler, reconstruct_handler};
use self::models::AppState;

/// Registers the API routes
///
/// Kept separate from [`start_server`] so tests can mount the same routes on
/// an in-process service.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/parse").route(web::post().to(parse_handler)))
        .service(web::resource("/reconstruct").route(web::post().to(reconstruct_handler)))
        .service(web::resource("/health").route(web::get().to(health_check)));
}

/// Starts the API server with the specified configuration
///
/// # Arguments
/// * `config` - Bind address and logging settings
///
/// # Returns
/// * `Result<()>` - Success once the server stops, or a bind/runtime error
#[instrument(skip(config), fields(host = %config.host, port = config.port))]
pub async fn start_server(config: ApiConfig) -> Result<()> {
    let state = web::Data::new(AppState::default());

    info!("Starting HTTP server at {}:{}", config.host, config.port);
    let server_result = HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .configure(configure)
    })
    .bind((config.host.as_str(), config.port))
    .map_err(|e| {
        error!("Failed to bind to {}:{}: {}", config.host, config.port, e);
        e
    })?
    .run()
    .await;

    if let Err(e) = server_result {
        error!("Server error: {}", e);
        return Err(e.into());
    }

    info!("Server shutdown complete");
    Ok(())
}
