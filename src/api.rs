use std::sync::Arc;

use axum::{
    Router,
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Json, Response},
    routing::get,
};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{debug, info, warn};

use crate::{
    clients::health::HealthChecker,
    gateway::{Gateway, Outcome},
    models::{health::HealthStatus, request::WebhookRequest, response::ApiResponse},
};

pub struct AppState {
    pub gateway: Gateway,
    pub health_checker: HealthChecker,
}

/// `/health` plus a catch-all that feeds every other request to the gateway,
/// so provider subscriptions can point at any path.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .fallback(receive_notification)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run_api_server(port: u16, state: Arc<AppState>) -> anyhow::Result<()> {
    let app = router(state);

    let addr = format!("0.0.0.0:{}", port);
    let listener = TcpListener::bind(&addr).await?;

    info!(address = %addr, "Notification gateway started");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Unable to listen for shutdown signal");
        std::future::pending::<()>().await;
    }

    info!("Shutdown signal received");
}

async fn receive_notification(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let request = WebhookRequest::new(headers, body);

    match state.gateway.handle(&request) {
        Outcome::Handled(ack) => (StatusCode::OK, ack.as_str()).into_response(),
        Outcome::Failed(e) => e.into_response(),
        Outcome::Unhandled => {
            debug!("Request carries no provider header");
            (
                StatusCode::NOT_FOUND,
                Json(ApiResponse::<()>::error(
                    "No notification provider header present".to_string(),
                    "Request not handled".to_string(),
                )),
            )
                .into_response()
        }
    }
}

async fn health_check(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let health = state.health_checker.check_all();

    let status_code = match health.status {
        HealthStatus::Healthy => StatusCode::OK,
        HealthStatus::Unhealthy => StatusCode::SERVICE_UNAVAILABLE,
    };

    (status_code, Json(health))
}
