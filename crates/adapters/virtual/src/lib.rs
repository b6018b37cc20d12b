//! # minimdm-adapter-virtual
//!
//! Virtual device enrollment program account that serves simulated devices
//! for testing and demonstration purposes.
//!
//! ## Provided devices
//!
//! | Serial | Model | Profile status |
//! |--------|-------|----------------|
//! | `VIRTUALMAC001` | MacBook Pro | `assigned` |
//! | `VIRTUALIPAD01` | iPad Air | `pushed` |
//! | `VIRTUALPHONE1` | iPhone 15 | `empty` |
//!
//! ## Dependency rule
//!
//! Depends on `minimdm-app` (port traits) and `minimdm-domain` only.

use std::future::Future;

use minimdm_app::ports::DepClient;
use minimdm_domain::device::{Device, ProfileStatus};
use minimdm_domain::error::MdmError;
use minimdm_domain::id::DeviceId;

/// DEP client backed by an in-process device list.
#[derive(Debug, Clone)]
pub struct VirtualDepClient {
    devices: Vec<Device>,
}

impl Default for VirtualDepClient {
    fn default() -> Self {
        Self {
            devices: vec![
                demo_device("VIRTUALMAC001", "MacBook Pro", ProfileStatus::Assigned),
                demo_device("VIRTUALIPAD01", "iPad Air", ProfileStatus::Pushed),
                demo_device("VIRTUALPHONE1", "iPhone 15", ProfileStatus::Empty),
            ],
        }
    }
}

fn demo_device(serial: &str, model: &str, status: ProfileStatus) -> Device {
    Device {
        id: DeviceId::new(),
        serial_number: serial.to_string(),
        model: Some(model.to_string()),
        description: Some(format!("Virtual {model}")),
        color: None,
        asset_tag: None,
        profile_status: status,
        device_assigned_by: Some("virtual".to_string()),
        device_assigned_date: None,
    }
}

impl VirtualDepClient {
    /// Serve exactly `devices` instead of the demo set.
    #[must_use]
    pub fn with_devices(devices: Vec<Device>) -> Self {
        Self { devices }
    }

    /// Devices this account reports.
    #[must_use]
    pub fn devices(&self) -> &[Device] {
        &self.devices
    }
}

impl DepClient for VirtualDepClient {
    fn fetch_devices(&self) -> impl Future<Output = Result<Vec<Device>, MdmError>> + Send {
        tracing::debug!(count = self.devices.len(), "serving virtual enrollment devices");
        let devices = self.devices.clone();
        async { Ok(devices) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn should_serve_three_demo_devices_by_default() {
        let client = VirtualDepClient::default();
        let devices = client.fetch_devices().await.unwrap();

        assert_eq!(devices.len(), 3);
        assert!(devices.iter().all(|d| d.validate().is_ok()));
    }

    #[tokio::test]
    async fn should_serve_configured_devices() {
        let device = Device::builder()
            .serial_number("C02XL0GHJGH5")
            .build()
            .unwrap();
        let client = VirtualDepClient::with_devices(vec![device.clone()]);

        let devices = client.fetch_devices().await.unwrap();
        assert_eq!(devices, vec![device]);
    }

    #[tokio::test]
    async fn should_keep_device_ids_stable_across_fetches() {
        let client = VirtualDepClient::default();
        let first = client.fetch_devices().await.unwrap();
        let second = client.fetch_devices().await.unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn should_use_unique_serial_numbers_in_demo_set() {
        let client = VirtualDepClient::default();
        let mut serials: Vec<&str> = client
            .devices()
            .iter()
            .map(|d| d.serial_number.as_str())
            .collect();
        serials.sort_unstable();
        serials.dedup();
        assert_eq!(serials.len(), 3);
    }
}
