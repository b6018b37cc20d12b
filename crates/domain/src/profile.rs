//! Profile — a configuration profile that can be installed on devices.

use serde::{Deserialize, Serialize};

use crate::error::{MdmError, ValidationError};
use crate::id::ProfileId;

/// A configuration profile.
///
/// `payload_identifier` is the reverse-DNS identifier declared inside the
/// profile payload and is unique across stored profiles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub id: ProfileId,
    pub payload_identifier: String,
    pub data: String,
}

impl Profile {
    /// Create a builder for constructing a [`Profile`].
    #[must_use]
    pub fn builder() -> ProfileBuilder {
        ProfileBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`MdmError::Validation`] when `payload_identifier` is blank.
    pub fn validate(&self) -> Result<(), MdmError> {
        if self.payload_identifier.trim().is_empty() {
            return Err(ValidationError::EmptyPayloadIdentifier.into());
        }
        Ok(())
    }
}

/// Step-by-step builder for [`Profile`].
#[derive(Debug, Default)]
pub struct ProfileBuilder {
    id: Option<ProfileId>,
    payload_identifier: Option<String>,
    data: Option<String>,
}

impl ProfileBuilder {
    #[must_use]
    pub fn id(mut self, id: ProfileId) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub fn payload_identifier(mut self, payload_identifier: impl Into<String>) -> Self {
        self.payload_identifier = Some(payload_identifier.into());
        self
    }

    #[must_use]
    pub fn data(mut self, data: impl Into<String>) -> Self {
        self.data = Some(data.into());
        self
    }

    /// Consume the builder, validate, and return a [`Profile`].
    ///
    /// # Errors
    ///
    /// Returns [`MdmError::Validation`] if `payload_identifier` is missing or
    /// blank.
    pub fn build(self) -> Result<Profile, MdmError> {
        let profile = Profile {
            id: self.id.unwrap_or_default(),
            payload_identifier: self.payload_identifier.unwrap_or_default(),
            data: self.data.unwrap_or_default(),
        };
        profile.validate()?;
        Ok(profile)
    }
}
