//! # Audio Sentry Backend - Main Application Entry Point
//!
//! Actix-web server exposing two independent paths:
//!
//! - a paginated CRUD API for the generic "example" resource, backed by a
//!   volatile in-memory repository
//! - an audio-detection pipeline that validates a `.wav` upload, proxies
//!   it to the external AI detection service, and normalizes the reply
//!
//! ## Application Architecture:
//! - **config**: Layered configuration (TOML file + environment variables)
//! - **state**: Shared state (repository, detection client, metrics)
//! - **examples**: Example records, store, and repository
//! - **pagination**: Page-window arithmetic and the list envelope
//! - **detection**: Outbound client and response normalization
//! - **upload** / **spreadsheet**: Multipart intake and CSV extraction
//! - **handlers**: HTTP request handlers
//! - **middleware**: Request logging + metrics collection
//! - **error**: Error taxonomy and the HTTP error envelope

mod config;
mod detection;
mod error;
mod examples;
mod handlers;
mod health;
mod middleware;
mod pagination;
mod response;
mod spreadsheet;
mod state;
mod upload;

use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use anyhow::Result;
use config::AppConfig;
use state::AppState;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Process-wide flag flipped by the signal handler task once a shutdown
/// signal arrives.
static SHUTDOWN_SIGNAL: AtomicBool = AtomicBool::new(false);

#[actix_web::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    init_tracing()?;

    let config = AppConfig::load()?;
    config.validate()?;

    info!("Starting audio-sentry-backend v{}", env!("CARGO_PKG_VERSION"));
    info!(
        "Configuration loaded: {}:{} ({}), detection service at {}",
        config.server.host, config.server.port, config.environment, config.detection.base_url
    );

    let app_state = AppState::new(config.clone());
    let bind_addr = format!("{}:{}", config.server.host, config.server.port);

    setup_signal_handlers();

    info!("Starting HTTP server on {}", bind_addr);

    let server = HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header()
            .max_age(3600);

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            // Route extractor failures through the shared error envelope
            .app_data(web::JsonConfig::default().error_handler(|err, _req| {
                error::AppError::BadRequest(format!("JSON parsing error: {}", err)).into()
            }))
            .app_data(web::QueryConfig::default().error_handler(|err, _req| {
                error::AppError::BadRequest(format!("Invalid query parameters: {}", err)).into()
            }))
            .wrap(cors)
            .wrap(middleware::Telemetry)
            .service(
                web::scope("/api/v1")
                    .service(
                        web::scope("/examples")
                            .route("", web::get().to(handlers::get_all_examples))
                            .route("", web::post().to(handlers::create_example))
                            .route("/upload", web::post().to(handlers::upload_examples))
                            .route("/{id}", web::get().to(handlers::get_example_by_id))
                            .route("/{id}", web::put().to(handlers::update_example_by_id))
                            .route("/{id}", web::delete().to(handlers::delete_example_by_id)),
                    )
                    .route("/audio-detection", web::post().to(handlers::detect_audio))
                    .route("/health", web::get().to(health::health_check))
                    .route("/metrics", web::get().to(health::detailed_metrics)),
            )
            // Health check at root level for load balancers
            .route("/health", web::get().to(health::health_check))
    })
    .bind(&bind_addr)?
    .run();

    let server_handle = server.handle();
    let server_task = tokio::spawn(server);

    tokio::select! {
        result = server_task => {
            match result {
                Ok(server_result) => {
                    if let Err(e) = server_result {
                        error!("Server error: {}", e);
                    }
                }
                Err(e) => {
                    error!("Server task error: {}", e);
                }
            }
        }
        _ = wait_for_shutdown() => {
            info!("Shutdown signal received, stopping server...");
            server_handle.stop(true).await;
        }
    }

    info!("Server stopped gracefully");
    Ok(())
}

fn init_tracing() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "audio_sentry_backend=debug,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    Ok(())
}

/// Flip the shutdown flag on SIGTERM or SIGINT.
fn setup_signal_handlers() {
    tokio::spawn(async {
        let mut sigterm = tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler");
        let mut sigint = tokio::signal::unix::signal(tokio::signal::unix::SignalKind::interrupt())
            .expect("Failed to install SIGINT handler");

        tokio::select! {
            _ = sigterm.recv() => {
                info!("Received SIGTERM");
            }
            _ = sigint.recv() => {
                info!("Received SIGINT");
            }
        }

        SHUTDOWN_SIGNAL.store(true, Ordering::SeqCst);
    });
}

async fn wait_for_shutdown() {
    while !SHUTDOWN_SIGNAL.load(Ordering::SeqCst) {
        tokio::time::sleep(tokio::time::Duration::from_millis(100)).await;
    }
}
