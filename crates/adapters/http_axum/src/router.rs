//! Axum router assembly.

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use minimdm_app::ports::{DepClient, DeviceRepository, ProfileRepository};

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Mounts the management API under `/management/v1` next to a `/health`
/// probe. Unmatched paths and methods fall through to axum's own `404` and
/// `405` responses. Includes a [`TraceLayer`] that logs each HTTP
/// request/response using the `tracing` ecosystem.
pub fn build<C, DR, PR>(state: AppState<C, DR, PR>) -> Router
where
    C: DepClient + Send + Sync + 'static,
    DR: DeviceRepository + Send + Sync + 'static,
    PR: ProfileRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .nest("/management/v1", crate::api::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}
