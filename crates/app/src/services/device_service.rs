//! Device service — use-cases for syncing devices from the enrollment account.

use minimdm_domain::device::Device;
use minimdm_domain::error::MdmError;

use crate::ports::{DepClient, DeviceRepository};

/// Application service for device synchronisation and listing.
pub struct DeviceService<C, R> {
    client: C,
    repo: R,
}

impl<C: DepClient, R: DeviceRepository> DeviceService<C, R> {
    /// Create a new service backed by the given enrollment client and repository.
    pub fn new(client: C, repo: R) -> Self {
        Self { client, repo }
    }

    /// Fetch every device assigned to the enrollment account and store it.
    ///
    /// Devices are matched by serial number: a known serial keeps its stored
    /// id and has its other fields replaced, an unknown one is created.
    /// Returns the stored devices in the order the client reported them.
    ///
    /// # Errors
    ///
    /// Returns [`MdmError::Enrollment`] if the client fails or reports an
    /// invalid device, or a storage error propagated from the repository.
    /// Devices stored before the failure stay stored.
    #[tracing::instrument(skip(self))]
    pub async fn fetch_devices(&self) -> Result<Vec<Device>, MdmError> {
        let fetched = self.client.fetch_devices().await?;
        let mut synced = Vec::with_capacity(fetched.len());
        for device in fetched {
            synced.push(self.upsert_device(device).await?);
        }
        tracing::info!(count = synced.len(), "synced devices from enrollment account");
        Ok(synced)
    }

    async fn upsert_device(&self, device: Device) -> Result<Device, MdmError> {
        device
            .validate()
            .map_err(|err| MdmError::Enrollment(Box::new(err)))?;
        match self
            .repo
            .find_by_serial_number(&device.serial_number)
            .await?
        {
            Some(existing) => {
                self.repo
                    .update(Device {
                        id: existing.id,
                        ..device
                    })
                    .await
            }
            None => self.repo.create(device).await,
        }
    }
}
