//! Storage port — repository traits for persistence.

use std::future::Future;

use minimdm_domain::device::Device;
use minimdm_domain::error::MdmError;
use minimdm_domain::profile::Profile;

/// Repository for persisting and querying [`Device`]s.
pub trait DeviceRepository {
    /// Create a new device in storage.
    fn create(&self, device: Device) -> impl Future<Output = Result<Device, MdmError>> + Send;

    /// Find a device by its serial number.
    fn find_by_serial_number(
        &self,
        serial_number: &str,
    ) -> impl Future<Output = Result<Option<Device>, MdmError>> + Send;

    /// Get all devices.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Device>, MdmError>> + Send;

    /// Update an existing device.
    fn update(&self, device: Device) -> impl Future<Output = Result<Device, MdmError>> + Send;
}

/// Repository for persisting and querying [`Profile`]s.
pub trait ProfileRepository {
    /// Create a new profile in storage.
    ///
    /// Implementations must return [`MdmError::Conflict`] when a profile with
    /// the same payload identifier is already stored.
    fn create(&self, profile: Profile) -> impl Future<Output = Result<Profile, MdmError>> + Send;

    /// Find a profile by its payload identifier.
    fn find_by_payload_identifier(
        &self,
        payload_identifier: &str,
    ) -> impl Future<Output = Result<Option<Profile>, MdmError>> + Send;

    /// Get all profiles.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Profile>, MdmError>> + Send;
}
