//! # minimdm-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the **management JSON API** under `/management/v1`
//! - Decode raw requests into typed, validated request values ([`decode`])
//! - Invoke application services through uniform endpoint adapters
//!   ([`endpoint`])
//! - Encode replies and failures into a single JSON wire format
//!   ([`encode`], [`error`])
//!
//! ## Request pipeline
//! Every route is `decode → endpoint → encode`. A decoder either yields a
//! request value that already passed required-field validation or rejects
//! the request. Endpoint adapters always produce a [`encode::Reply`], with
//! business failures carried as [`encode::Reply::Failure`]. Every failure,
//! whichever stage produced it, is written by the error encoder exactly once.
//!
//! ## Dependency rule
//! Depends on `minimdm-app` (for port traits and services) and
//! `minimdm-domain` (for domain types used in request/response mapping).
//! Never leaks axum types into the domain.

pub mod api;
pub mod decode;
pub mod encode;
pub mod endpoint;
pub mod error;
pub mod router;
pub mod state;

#[cfg(test)]
mod testing;
