//! Endpoint adapters — one per business operation.
//!
//! An adapter receives an already validated request value, calls the
//! injected service and always returns a [`Reply`]; business failures become
//! [`Reply::Failure`].

use serde::Serialize;

use minimdm_app::ports::{DepClient, DeviceRepository, ProfileRepository};
use minimdm_app::services::device_service::DeviceService;
use minimdm_app::services::profile_service::ProfileService;
use minimdm_domain::profile::Profile;

use crate::decode::{AddProfileRequest, FetchDevicesRequest, ListProfilesRequest};
use crate::encode::Reply;

/// Body of a successful device fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FetchDevicesResponse {
    /// Number of devices synced from the enrollment account.
    pub fetched: usize,
}

pub async fn fetch_devices<C, R>(
    service: &DeviceService<C, R>,
    _request: FetchDevicesRequest,
) -> Reply<FetchDevicesResponse>
where
    C: DepClient,
    R: DeviceRepository,
{
    service.fetch_devices().await.map_or_else(Reply::failure, |devices| {
        Reply::object(FetchDevicesResponse {
            fetched: devices.len(),
        })
    })
}

pub async fn add_profile<R>(service: &ProfileService<R>, request: AddProfileRequest) -> Reply<Profile>
where
    R: ProfileRepository,
{
    let profile = match Profile::builder()
        .payload_identifier(request.payload_identifier)
        .data(request.data)
        .build()
    {
        Ok(profile) => profile,
        Err(err) => return Reply::failure(err),
    };
    service
        .add_profile(profile)
        .await
        .map_or_else(Reply::failure, Reply::object)
}

pub async fn list_profiles<R>(
    service: &ProfileService<R>,
    _request: ListProfilesRequest,
) -> Reply<Profile>
where
    R: ProfileRepository,
{
    service
        .list_profiles()
        .await
        .map_or_else(Reply::failure, Reply::collection)
}
