//! Request decoders.
//!
//! Each route has a request type implementing an axum extractor. A decoder
//! either yields a fully validated value or rejects the request; it never
//! succeeds with a partially populated one.

use std::convert::Infallible;

use axum::body::Bytes;
use axum::extract::{FromRequest, FromRequestParts, Request};
use axum::http::request::Parts;
use serde::Deserialize;

use crate::error::{ApiError, TransportError};

/// `POST /management/v1/devices/fetch` takes no parameters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FetchDevicesRequest;

impl<S: Send + Sync> FromRequestParts<S> for FetchDevicesRequest {
    type Rejection = Infallible;

    async fn from_request_parts(_parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self)
    }
}

/// `GET /management/v1/profiles` takes no parameters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListProfilesRequest;

impl<S: Send + Sync> FromRequestParts<S> for ListProfilesRequest {
    type Rejection = Infallible;

    async fn from_request_parts(_parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self)
    }
}

/// Body of `POST /management/v1/profiles`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AddProfileRequest {
    /// Required, never blank once decoded.
    #[serde(default)]
    pub payload_identifier: String,
    /// Profile document, stored as-is.
    #[serde(default)]
    pub data: String,
}

impl AddProfileRequest {
    /// Decode and validate a raw request body.
    ///
    /// An absent body (no bytes, whitespace only, or a JSON `null`) and a
    /// blank `payload_identifier` all fail with [`ApiError::empty_request`].
    /// Any other parse failure is returned unchanged as an internal error.
    ///
    /// # Errors
    ///
    /// See above.
    pub fn from_body(body: &[u8]) -> Result<Self, ApiError> {
        if body.trim_ascii().is_empty() {
            return Err(ApiError::empty_request());
        }
        match serde_json::from_slice::<Option<Self>>(body)? {
            Some(request) if !request.payload_identifier.trim().is_empty() => Ok(request),
            _ => Err(ApiError::empty_request()),
        }
    }
}

impl<S: Send + Sync> FromRequest<S> for AddProfileRequest {
    type Rejection = TransportError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let body = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| {
                TransportError::decode(ApiError::internal(rejection.body_text()))
            })?;
        Self::from_body(&body).map_err(TransportError::decode)
    }
}
