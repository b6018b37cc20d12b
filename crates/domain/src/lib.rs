//! # minimdm-domain
//!
//! Pure domain model for the minimdm device-management server.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions, timestamps
//! - Define **Devices** (hardware records synced from a device enrollment
//!   program account)
//! - Define **Profiles** (configuration profiles identified by their payload
//!   identifier)
//! - Contain all invariant enforcement and domain logic
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod time;

pub mod device;
pub mod profile;
