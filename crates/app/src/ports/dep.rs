//! Device enrollment program port — the upstream source of devices.

use std::future::Future;

use minimdm_domain::device::Device;
use minimdm_domain::error::MdmError;

/// Client for the organisation's device enrollment program account.
pub trait DepClient {
    /// Fetch every device currently assigned to the account.
    ///
    /// Implementations report transport or upstream failures as
    /// [`MdmError::Enrollment`].
    fn fetch_devices(&self) -> impl Future<Output = Result<Vec<Device>, MdmError>> + Send;
}
