//! In-memory port implementations shared by the adapter's tests.

use std::future::Future;
use std::sync::Mutex;

use minimdm_app::ports::{DepClient, DeviceRepository, ProfileRepository};
use minimdm_app::services::device_service::DeviceService;
use minimdm_app::services::profile_service::ProfileService;
use minimdm_domain::device::Device;
use minimdm_domain::error::{ConflictError, MdmError};
use minimdm_domain::profile::Profile;

use crate::state::AppState;

/// DEP client returning a fixed device list, or failing when `devices` is `None`.
pub struct StubDepClient {
    pub devices: Option<Vec<Device>>,
}

impl DepClient for StubDepClient {
    fn fetch_devices(&self) -> impl Future<Output = Result<Vec<Device>, MdmError>> + Send {
        let result = self.devices.clone().ok_or_else(|| {
            MdmError::Enrollment(Box::new(std::io::Error::other("connection refused")))
        });
        async { result }
    }
}

#[derive(Default)]
pub struct InMemoryDeviceRepo {
    store: Mutex<Vec<Device>>,
}

impl DeviceRepository for InMemoryDeviceRepo {
    fn create(&self, device: Device) -> impl Future<Output = Result<Device, MdmError>> + Send {
        self.store.lock().unwrap().push(device.clone());
        async { Ok(device) }
    }

    fn find_by_serial_number(
        &self,
        serial_number: &str,
    ) -> impl Future<Output = Result<Option<Device>, MdmError>> + Send {
        let result = self
            .store
            .lock()
            .unwrap()
            .iter()
            .find(|d| d.serial_number == serial_number)
            .cloned();
        async { Ok(result) }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Device>, MdmError>> + Send {
        let result = self.store.lock().unwrap().clone();
        async { Ok(result) }
    }

    fn update(&self, device: Device) -> impl Future<Output = Result<Device, MdmError>> + Send {
        let mut store = self.store.lock().unwrap();
        store.retain(|d| d.id != device.id);
        store.push(device.clone());
        async { Ok(device) }
    }
}

/// Profile repository enforcing identifier uniqueness like the real store.
#[derive(Default)]
pub struct InMemoryProfileRepo {
    store: Mutex<Vec<Profile>>,
}

impl ProfileRepository for InMemoryProfileRepo {
    fn create(&self, profile: Profile) -> impl Future<Output = Result<Profile, MdmError>> + Send {
        let mut store = self.store.lock().unwrap();
        let result: Result<Profile, MdmError> = if store
            .iter()
            .any(|p| p.payload_identifier == profile.payload_identifier)
        {
            Err(ConflictError::ProfileExists {
                payload_identifier: profile.payload_identifier,
            }
            .into())
        } else {
            store.push(profile.clone());
            Ok(profile)
        };
        async { result }
    }

    fn find_by_payload_identifier(
        &self,
        payload_identifier: &str,
    ) -> impl Future<Output = Result<Option<Profile>, MdmError>> + Send {
        let result = self
            .store
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.payload_identifier == payload_identifier)
            .cloned();
        async { Ok(result) }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Profile>, MdmError>> + Send {
        let result = self.store.lock().unwrap().clone();
        async { Ok(result) }
    }
}

/// Profile repository whose every call fails with a storage error.
pub struct BrokenProfileRepo;

fn storage_failure() -> MdmError {
    MdmError::Storage(Box::new(std::io::Error::other("database is locked")))
}

impl ProfileRepository for BrokenProfileRepo {
    fn create(&self, _profile: Profile) -> impl Future<Output = Result<Profile, MdmError>> + Send {
        async { Err(storage_failure()) }
    }

    fn find_by_payload_identifier(
        &self,
        _payload_identifier: &str,
    ) -> impl Future<Output = Result<Option<Profile>, MdmError>> + Send {
        async { Err(storage_failure()) }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Profile>, MdmError>> + Send {
        async { Err(storage_failure()) }
    }
}

pub type TestState<PR = InMemoryProfileRepo> = AppState<StubDepClient, InMemoryDeviceRepo, PR>;

pub fn state_with(devices: Option<Vec<Device>>) -> TestState {
    state_with_profiles(devices, InMemoryProfileRepo::default())
}

pub fn state_with_profiles<PR>(devices: Option<Vec<Device>>, profiles: PR) -> TestState<PR>
where
    PR: ProfileRepository + Send + Sync + 'static,
{
    AppState::new(
        DeviceService::new(StubDepClient { devices }, InMemoryDeviceRepo::default()),
        ProfileService::new(profiles),
    )
}
