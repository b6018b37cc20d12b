//! Shared application state for axum handlers.

use std::sync::Arc;

use minimdm_app::ports::{DepClient, DeviceRepository, ProfileRepository};
use minimdm_app::services::device_service::DeviceService;
use minimdm_app::services::profile_service::ProfileService;

/// Application state shared across all axum handlers.
///
/// Generic over the enrollment client and repository types to avoid dynamic
/// dispatch. `Clone` is implemented manually so the underlying types
/// themselves do not need to be `Clone`. Only the `Arc` wrappers are cloned.
pub struct AppState<C, DR, PR> {
    /// Device synchronisation service.
    pub device_service: Arc<DeviceService<C, DR>>,
    /// Profile service.
    pub profile_service: Arc<ProfileService<PR>>,
}

impl<C, DR, PR> Clone for AppState<C, DR, PR> {
    fn clone(&self) -> Self {
        Self {
            device_service: Arc::clone(&self.device_service),
            profile_service: Arc::clone(&self.profile_service),
        }
    }
}

impl<C, DR, PR> AppState<C, DR, PR>
where
    C: DepClient + Send + Sync + 'static,
    DR: DeviceRepository + Send + Sync + 'static,
    PR: ProfileRepository + Send + Sync + 'static,
{
    /// Create a new application state from service instances.
    pub fn new(device_service: DeviceService<C, DR>, profile_service: ProfileService<PR>) -> Self {
        Self {
            device_service: Arc::new(device_service),
            profile_service: Arc::new(profile_service),
        }
    }
}
