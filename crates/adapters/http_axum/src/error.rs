//! Error taxonomy and the HTTP error encoder.
//!
//! Every failure leaving the API is an [`ApiError`]: one of a closed set of
//! [`ErrorKind`]s plus the human-readable message shown to the client.
//! Failures raised by the transport pipeline itself travel inside a
//! [`TransportError`] envelope, which the encoder unwraps before mapping.

use std::error::Error as _;
use std::fmt;

use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};

use minimdm_domain::error::MdmError;

/// Content type of every JSON response, success or failure.
pub const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";

/// Closed set of failure kinds surfaced over HTTP.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The request was empty or failed validation.
    InvalidRequest,
    /// The request conflicts with stored state.
    Conflict,
    /// Anything else.
    Internal,
}

impl ErrorKind {
    /// HTTP status written for this kind.
    #[must_use]
    pub const fn status(self) -> StatusCode {
        match self {
            Self::InvalidRequest => StatusCode::BAD_REQUEST,
            Self::Conflict => StatusCode::CONFLICT,
            Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// A classified failure ready to be written as `{"error": "<message>"}`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ApiError {
    kind: ErrorKind,
    message: String,
}

impl ApiError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// The request carried no body, or its required identifier was blank.
    #[must_use]
    pub fn empty_request() -> Self {
        Self::new(ErrorKind::InvalidRequest, "empty request")
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal, message)
    }

    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<MdmError> for ApiError {
    fn from(err: MdmError) -> Self {
        let kind = match &err {
            MdmError::Validation(_) => ErrorKind::InvalidRequest,
            MdmError::Conflict(_) => ErrorKind::Conflict,
            MdmError::Storage(_) | MdmError::Enrollment(_) => ErrorKind::Internal,
        };
        if kind == ErrorKind::Internal {
            // only the display text reaches the client
            tracing::error!(error = %err, cause = ?err.source(), "request failed");
        }
        Self::new(kind, err.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::internal(err.to_string())
    }
}

/// Error encoder: the status comes from the kind, the body is always
/// `{"error": "<message>"}`.
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.kind.status();
        tracing::debug!(status = status.as_u16(), error = %self.message, "encoding error response");

        let body = serde_json::json!({ "error": self.message }).to_string();
        (
            status,
            [(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE))],
            body,
        )
            .into_response()
    }
}

/// Pipeline stage that produced a [`TransportError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Decode,
    Encode,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Decode => f.write_str("decode"),
            Self::Encode => f.write_str("encode"),
        }
    }
}

/// Envelope around failures raised while decoding a request or encoding a
/// reply. Unwrapped by the error encoder, so the client sees the inner error.
#[derive(Debug, thiserror::Error)]
#[error("{stage} stage failed")]
pub struct TransportError {
    stage: Stage,
    #[source]
    inner: ApiError,
}

impl TransportError {
    pub fn decode(err: impl Into<ApiError>) -> Self {
        Self {
            stage: Stage::Decode,
            inner: err.into(),
        }
    }

    pub fn encode(err: impl Into<ApiError>) -> Self {
        Self {
            stage: Stage::Encode,
            inner: err.into(),
        }
    }

    #[must_use]
    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// Drop the envelope and recover the original error.
    #[must_use]
    pub fn into_inner(self) -> ApiError {
        self.inner
    }
}

impl IntoResponse for TransportError {
    fn into_response(self) -> Response {
        tracing::debug!(stage = %self.stage, error = %self.inner, "transport failure");
        self.into_inner().into_response()
    }
}
