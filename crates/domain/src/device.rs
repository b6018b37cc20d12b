//! Device — a piece of hardware assigned to the organisation's device
//! enrollment program (DEP) account.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{MdmError, ValidationError};
use crate::id::DeviceId;
use crate::time::Timestamp;

/// Assignment state of the enrollment profile for a device.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileStatus {
    /// No enrollment profile assigned.
    #[default]
    Empty,
    /// A profile has been assigned but not yet delivered.
    Assigned,
    /// The profile was pushed to the device.
    Pushed,
    /// The profile was removed.
    Removed,
}

impl ProfileStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::Assigned => "assigned",
            Self::Pushed => "pushed",
            Self::Removed => "removed",
        }
    }
}

impl fmt::Display for ProfileStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when parsing an unknown [`ProfileStatus`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown profile status {0:?}")]
pub struct UnknownProfileStatus(pub String);

impl FromStr for ProfileStatus {
    type Err = UnknownProfileStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "empty" => Ok(Self::Empty),
            "assigned" => Ok(Self::Assigned),
            "pushed" => Ok(Self::Pushed),
            "removed" => Ok(Self::Removed),
            other => Err(UnknownProfileStatus(other.to_string())),
        }
    }
}

/// A device known to the DEP account.
///
/// The serial number is the natural key: syncing the same serial twice
/// updates the stored record instead of creating a new one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Device {
    pub id: DeviceId,
    pub serial_number: String,
    pub model: Option<String>,
    pub description: Option<String>,
    pub color: Option<String>,
    pub asset_tag: Option<String>,
    pub profile_status: ProfileStatus,
    pub device_assigned_by: Option<String>,
    pub device_assigned_date: Option<Timestamp>,
}

impl Device {
    /// Create a builder for constructing a [`Device`].
    #[must_use]
    pub fn builder() -> DeviceBuilder {
        DeviceBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`MdmError::Validation`] when `serial_number` is blank.
    pub fn validate(&self) -> Result<(), MdmError> {
        if self.serial_number.trim().is_empty() {
            return Err(ValidationError::EmptySerialNumber.into());
        }
        Ok(())
    }
}

/// Step-by-step builder for [`Device`].
#[derive(Debug, Default)]
pub struct DeviceBuilder {
    id: Option<DeviceId>,
    serial_number: Option<String>,
    model: Option<String>,
    description: Option<String>,
    color: Option<String>,
    asset_tag: Option<String>,
    profile_status: ProfileStatus,
    device_assigned_by: Option<String>,
    device_assigned_date: Option<Timestamp>,
}

impl DeviceBuilder {
    #[must_use]
    pub fn id(mut self, id: DeviceId) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub fn serial_number(mut self, serial_number: impl Into<String>) -> Self {
        self.serial_number = Some(serial_number.into());
        self
    }

    #[must_use]
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    #[must_use]
    pub fn asset_tag(mut self, asset_tag: impl Into<String>) -> Self {
        self.asset_tag = Some(asset_tag.into());
        self
    }

    #[must_use]
    pub fn profile_status(mut self, profile_status: ProfileStatus) -> Self {
        self.profile_status = profile_status;
        self
    }

    #[must_use]
    pub fn device_assigned_by(mut self, assigned_by: impl Into<String>) -> Self {
        self.device_assigned_by = Some(assigned_by.into());
        self
    }

    #[must_use]
    pub fn device_assigned_date(mut self, assigned_date: Timestamp) -> Self {
        self.device_assigned_date = Some(assigned_date);
        self
    }

    /// Consume the builder, validate, and return a [`Device`].
    ///
    /// # Errors
    ///
    /// Returns [`MdmError::Validation`] if `serial_number` is missing or blank.
    pub fn build(self) -> Result<Device, MdmError> {
        let device = Device {
            id: self.id.unwrap_or_default(),
            serial_number: self.serial_number.unwrap_or_default(),
            model: self.model,
            description: self.description,
            color: self.color,
            asset_tag: self.asset_tag,
            profile_status: self.profile_status,
            device_assigned_by: self.device_assigned_by,
            device_assigned_date: self.device_assigned_date,
        };
        device.validate()?;
        Ok(device)
    }
}
