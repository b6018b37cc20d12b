//! Profile handlers.

use axum::extract::State;

use minimdm_app::ports::{DepClient, DeviceRepository, ProfileRepository};
use minimdm_domain::profile::Profile;

use crate::decode::{AddProfileRequest, ListProfilesRequest};
use crate::encode::Reply;
use crate::endpoint;
use crate::state::AppState;

/// `POST /management/v1/profiles`
pub async fn create<C, DR, PR>(
    State(state): State<AppState<C, DR, PR>>,
    request: AddProfileRequest,
) -> Reply<Profile>
where
    C: DepClient + Send + Sync + 'static,
    DR: DeviceRepository + Send + Sync + 'static,
    PR: ProfileRepository + Send + Sync + 'static,
{
    endpoint::add_profile(&state.profile_service, request).await
}

/// `GET /management/v1/profiles`
pub async fn list<C, DR, PR>(
    State(state): State<AppState<C, DR, PR>>,
    request: ListProfilesRequest,
) -> Reply<Profile>
where
    C: DepClient + Send + Sync + 'static,
    DR: DeviceRepository + Send + Sync + 'static,
    PR: ProfileRepository + Send + Sync + 'static,
{
    endpoint::list_profiles(&state.profile_service, request).await
}
