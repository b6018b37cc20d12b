//! Reply type returned by endpoint adapters and the response encoder.
//!
//! A [`Reply`] is decided in a fixed order: a failure always wins, then the
//! declared status (default `200 OK`), then the payload shape (single object
//! or collection).

use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::error::{ApiError, JSON_CONTENT_TYPE, TransportError};

/// Shape of a successful reply body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Payload<T> {
    /// Encoded as a single JSON object.
    Object(T),
    /// Encoded as a JSON array, element by element.
    Collection(Vec<T>),
}

/// A successful reply: a payload and an optional non-default status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Success<T> {
    pub payload: Payload<T>,
    pub status: Option<StatusCode>,
}

/// Outcome of an endpoint adapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply<T> {
    Success(Success<T>),
    Failure(ApiError),
}

impl<T> Reply<T> {
    #[must_use]
    pub fn object(value: T) -> Self {
        Self::Success(Success {
            payload: Payload::Object(value),
            status: None,
        })
    }

    #[must_use]
    pub fn collection(items: Vec<T>) -> Self {
        Self::Success(Success {
            payload: Payload::Collection(items),
            status: None,
        })
    }

    pub fn failure(err: impl Into<ApiError>) -> Self {
        Self::Failure(err.into())
    }

    /// Declare the success status. Has no effect on a failure.
    #[must_use]
    pub fn with_status(self, status: StatusCode) -> Self {
        match self {
            Self::Success(success) => Self::Success(Success {
                status: Some(status),
                ..success
            }),
            failure @ Self::Failure(_) => failure,
        }
    }
}

impl<T: Serialize> IntoResponse for Reply<T> {
    fn into_response(self) -> Response {
        match self {
            Self::Failure(err) => err.into_response(),
            Self::Success(success) => match success.encode() {
                Ok(response) => response,
                Err(err) => err.into_response(),
            },
        }
    }
}

impl<T: Serialize> Success<T> {
    /// Serialize the whole body before building the response so a failure
    /// never leaves a partial body behind.
    fn encode(self) -> Result<Response, TransportError> {
        let body = match &self.payload {
            Payload::Object(value) => serde_json::to_vec(value),
            Payload::Collection(items) => encode_list(items),
        }
        .map_err(TransportError::encode)?;

        Ok((
            self.status.unwrap_or(StatusCode::OK),
            [(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE))],
            body,
        )
            .into_response())
    }
}

fn encode_list<T: Serialize>(items: &[T]) -> Result<Vec<u8>, serde_json::Error> {
    let mut buf = Vec::with_capacity(2);
    buf.push(b'[');
    for (index, item) in items.iter().enumerate() {
        if index > 0 {
            buf.push(b',');
        }
        serde_json::to_writer(&mut buf, item)?;
    }
    buf.push(b']');
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use axum::body::to_bytes;
    use serde::Serializer;
    use serde::ser::Error as _;

    #[derive(Serialize)]
    struct Item {
        name: &'static str,
    }

    struct Unserializable;

    impl Serialize for Unserializable {
        fn serialize<S: Serializer>(&self, _serializer: S) -> Result<S::Ok, S::Error> {
            Err(S::Error::custom("cannot serialize"))
        }
    }

    async fn split(response: Response) -> (StatusCode, Option<String>, Vec<u8>) {
        let status = response.status();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .map(|value| value.to_str().unwrap().to_string());
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, content_type, bytes.to_vec())
    }

    #[tokio::test]
    async fn should_encode_object_with_default_status() {
        let (status, content_type, body) =
            split(Reply::object(Item { name: "wifi" }).into_response()).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(content_type.as_deref(), Some(JSON_CONTENT_TYPE));
        assert_eq!(body, br#"{"name":"wifi"}"#);
    }

    #[tokio::test]
    async fn should_write_declared_status_exactly() {
        let reply = Reply::object(Item { name: "wifi" }).with_status(StatusCode::CREATED);
        let (status, _, body) = split(reply.into_response()).await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body, br#"{"name":"wifi"}"#);
    }

    #[tokio::test]
    async fn should_encode_collection_as_array() {
        let reply = Reply::collection(vec![Item { name: "a" }, Item { name: "b" }]);
        let (status, content_type, body) = split(reply.into_response()).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(content_type.as_deref(), Some(JSON_CONTENT_TYPE));
        assert_eq!(body, br#"[{"name":"a"},{"name":"b"}]"#);
    }

    #[tokio::test]
    async fn should_encode_empty_collection_as_empty_array() {
        let (_, _, body) = split(Reply::<Item>::collection(vec![]).into_response()).await;
        assert_eq!(body, b"[]");
    }

    #[tokio::test]
    async fn should_combine_declared_status_with_collection() {
        let reply =
            Reply::collection(vec![Item { name: "a" }]).with_status(StatusCode::ACCEPTED);
        let (status, _, body) = split(reply.into_response()).await;

        assert_eq!(status, StatusCode::ACCEPTED);
        assert_eq!(body, br#"[{"name":"a"}]"#);
    }

    #[tokio::test]
    async fn should_write_only_error_body_when_failure() {
        let reply = Reply::<Item>::failure(ApiError::new(ErrorKind::Conflict, "taken"))
            .with_status(StatusCode::CREATED);
        let (status, content_type, body) = split(reply.into_response()).await;

        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(content_type.as_deref(), Some(JSON_CONTENT_TYPE));
        assert_eq!(body, br#"{"error":"taken"}"#);
    }

    #[tokio::test]
    async fn should_route_serialization_failure_to_error_encoder() {
        let reply = Reply::collection(vec![Unserializable]).with_status(StatusCode::CREATED);
        let (status, _, body) = split(reply.into_response()).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(body, serde_json::json!({ "error": "cannot serialize" }));
    }
}
