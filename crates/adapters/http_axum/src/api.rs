//! Management API — handlers mounted under `/management/v1`.

pub mod devices;
pub mod profiles;

use axum::Router;
use axum::routing::{get, post};

use minimdm_app::ports::{DepClient, DeviceRepository, ProfileRepository};

use crate::state::AppState;

/// Build the `/management/v1` sub-router.
pub fn routes<C, DR, PR>() -> Router<AppState<C, DR, PR>>
where
    C: DepClient + Send + Sync + 'static,
    DR: DeviceRepository + Send + Sync + 'static,
    PR: ProfileRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/devices/fetch", post(devices::fetch::<C, DR, PR>))
        .route(
            "/profiles",
            get(profiles::list::<C, DR, PR>).post(profiles::create::<C, DR, PR>),
        )
}
