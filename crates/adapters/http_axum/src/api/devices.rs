//! Device handlers.

use axum::extract::State;

use minimdm_app::ports::{DepClient, DeviceRepository, ProfileRepository};

use crate::decode::FetchDevicesRequest;
use crate::encode::Reply;
use crate::endpoint::{self, FetchDevicesResponse};
use crate::state::AppState;

/// `POST /management/v1/devices/fetch`
pub async fn fetch<C, DR, PR>(
    State(state): State<AppState<C, DR, PR>>,
    request: FetchDevicesRequest,
) -> Reply<FetchDevicesResponse>
where
    C: DepClient + Send + Sync + 'static,
    DR: DeviceRepository + Send + Sync + 'static,
    PR: ProfileRepository + Send + Sync + 'static,
{
    endpoint::fetch_devices(&state.device_service, request).await
}
