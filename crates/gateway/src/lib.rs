//! HTTP API gateway for Airwave.
//!
//! Exposes the chat endpoint plus a few read-only helpers for clients:
//! health, the persona table, command autocomplete and a context preview.
//!
//! Built on Axum for high performance async HTTP.

pub mod api;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::http::{HeaderValue, Method, header};
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing::{info, warn};

use airwave_orchestrator::RequestHandler;

/// Maximum accepted request body.
const BODY_LIMIT_BYTES: usize = 1024 * 1024;

/// Shared application state for the gateway.
pub struct GatewayState {
    pub handler: RequestHandler,
}

impl GatewayState {
    pub fn new(handler: RequestHandler) -> Self {
        Self { handler }
    }
}

pub type SharedState = Arc<GatewayState>;

/// Build the router with CORS, body limit and trace layers.
///
/// Without a configured origin only same-origin browser requests succeed.
pub fn build_router(state: SharedState, allowed_origin: Option<&str>) -> Router {
    api::router(state)
        .layer(DefaultBodyLimit::max(BODY_LIMIT_BYTES))
        .layer(cors_layer(allowed_origin))
        .layer(tower_http::trace::TraceLayer::new_for_http())
}

fn cors_layer(allowed_origin: Option<&str>) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE])
        .max_age(std::time::Duration::from_secs(3600));

    match allowed_origin.map(str::parse::<HeaderValue>) {
        Some(Ok(origin)) => cors.allow_origin(AllowOrigin::list([origin])),
        Some(Err(e)) => {
            warn!(error = %e, "Ignoring invalid allowed_origin");
            cors
        }
        None => cors,
    }
}

/// Start the gateway HTTP server.
///
/// Loads the framework and providers once; every request shares them.
pub async fn start(config: airwave_config::AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    let addr = format!("{}:{}", config.gateway.host, config.gateway.port);

    let handler = RequestHandler::from_config(&config);
    info!(
        framework = handler.framework().tier().as_str(),
        anthropic = handler.dispatcher().has_secondary(),
        "Orchestrator ready"
    );

    let state = Arc::new(GatewayState::new(handler));
    let app = build_router(state, config.gateway.allowed_origin.as_deref());

    info!(addr = %addr, "Gateway starting");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
