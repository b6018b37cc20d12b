//! Typed identifier newtypes backed by UUIDs.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Text that does not parse as an identifier of the given kind.
#[derive(Debug, thiserror::Error)]
#[error("invalid {kind} id {value:?}")]
pub struct InvalidId {
    kind: &'static str,
    value: String,
    #[source]
    source: uuid::Error,
}

macro_rules! define_id {
    ($(#[doc = $doc:expr])* $name:ident, $kind:literal) => {
        $(#[doc = $doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(uuid::Uuid);

        impl Default for $name {
            fn default() -> Self {
                Self(uuid::Uuid::new_v4())
            }
        }

        impl $name {
            /// Generate a fresh random (v4) identifier.
            #[must_use]
            pub fn new() -> Self {
                Self::default()
            }
        }

        impl From<uuid::Uuid> for $name {
            fn from(uuid: uuid::Uuid) -> Self {
                Self(uuid)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.hyphenated().fmt(f)
            }
        }

        impl FromStr for $name {
            type Err = InvalidId;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                uuid::Uuid::parse_str(s).map(Self).map_err(|source| InvalidId {
                    kind: $kind,
                    value: s.to_string(),
                    source,
                })
            }
        }
    };
}

define_id!(
    /// Unique identifier for a [`Device`](crate::device::Device).
    DeviceId,
    "device"
);

define_id!(
    /// Unique identifier for a [`Profile`](crate::profile::Profile).
    ProfileId,
    "profile"
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_generate_unique_ids_when_called_twice() {
        let a = ProfileId::new();
        let b = ProfileId::new();
        assert_ne!(a, b);
    }

    #[test]
    fn should_roundtrip_through_display_and_from_str() {
        let id = DeviceId::new();
        let parsed: DeviceId = id.to_string().parse().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn should_serialize_as_plain_uuid_string() {
        let uuid = uuid::Uuid::new_v4();
        let json = serde_json::to_string(&ProfileId::from(uuid)).unwrap();
        assert_eq!(json, format!("\"{uuid}\""));
    }

    #[test]
    fn should_name_id_kind_when_parsing_invalid_uuid() {
        let err = DeviceId::from_str("not-a-uuid").unwrap_err();
        assert_eq!(err.to_string(), "invalid device id \"not-a-uuid\"");
    }
}
