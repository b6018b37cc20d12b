//! # minimdm-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `DepClient` — fetch the devices assigned to the enrollment account
//!   - `DeviceRepository` — persistence for devices
//!   - `ProfileRepository` — persistence for configuration profiles
//! - Define **driving/inbound ports** as use-case structs:
//!   - `DeviceService` — sync devices from the enrollment account, list them
//!   - `ProfileService` — add and list profiles
//! - Orchestrate domain objects without knowing *how* persistence or IO works
//!
//! ## Dependency rule
//! Depends on `minimdm-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
