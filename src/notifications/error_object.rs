// SPDX-License-Identifier: MPL-2.0
//! Structured snapshot of a failed HTTP request.
//!
//! Mirrors the shape HTTP clients hand to the UI when a request fails:
//!
//! ```text
//! { message, response: { status, config: { url, data }, data: { status, error: { code } } } }
//! ```
//!
//! Every level is optional. Accessors walk the tree with explicit presence
//! checks, so a partial snapshot yields `None` rather than failing.

use crate::error::Result;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// An HTTP error as reported by the network layer.
///
/// Nested fields of the wrong shape (an HTML body, a numeric error code)
/// read as absent or as text instead of rejecting the whole snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ErrorObject {
    /// The client's own description of the failure.
    #[serde(
        default,
        deserialize_with = "value_as_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub message: Option<String>,

    #[serde(
        default,
        deserialize_with = "object_or_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub response: Option<ErrorResponse>,
}

/// The response half of the snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// HTTP status line code.
    #[serde(
        default,
        deserialize_with = "status_or_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub status: Option<u16>,

    /// The request that produced this response.
    #[serde(
        default,
        deserialize_with = "object_or_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub config: Option<RequestConfig>,

    /// Decoded response body. Non-object bodies (HTML pages, empty text) are absent.
    #[serde(
        default,
        deserialize_with = "object_or_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub data: Option<ResponseBody>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RequestConfig {
    #[serde(
        default,
        deserialize_with = "value_as_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub url: Option<String>,

    /// Request body as sent. Non-string bodies are kept as compact JSON text.
    #[serde(
        default,
        deserialize_with = "value_as_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub data: Option<String>,
}

/// API error body returned by the server.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ResponseBody {
    /// Status as echoed inside the body; may differ from the status line.
    #[serde(
        default,
        deserialize_with = "status_or_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub status: Option<u16>,

    #[serde(
        default,
        deserialize_with = "object_or_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub error: Option<ApiError>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ApiError {
    /// Numeric codes are kept as their JSON text.
    #[serde(
        default,
        deserialize_with = "value_as_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub code: Option<String>,
}

fn value_as_text<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(match raw {
        None | Some(Value::Null) => None,
        Some(Value::String(text)) => Some(text),
        Some(other) => Some(other.to_string()),
    })
}

fn status_or_none<'de, D>(deserializer: D) -> std::result::Result<Option<u16>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(match raw {
        Some(Value::Number(n)) => n.as_u64().and_then(|n| u16::try_from(n).ok()),
        Some(Value::String(text)) => text.trim().parse().ok(),
        _ => None,
    })
}

fn object_or_none<'de, D, T>(deserializer: D) -> std::result::Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(match raw {
        Some(value @ Value::Object(_)) => serde_json::from_value(value).ok(),
        _ => None,
    })
}

impl ErrorObject {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a snapshot from JSON text.
    ///
    /// Unknown fields are ignored and misshapen nested fields read as absent;
    /// only text that is not a JSON object fails.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Converts an already-decoded JSON value.
    pub fn from_value(value: serde_json::Value) -> Result<Self> {
        Ok(serde_json::from_value(value)?)
    }

    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Sets the HTTP status line code.
    #[must_use]
    pub fn with_status(mut self, status: u16) -> Self {
        self.response_mut().status = Some(status);
        self
    }

    /// Records the request URL and, if any, its body.
    #[must_use]
    pub fn with_request(mut self, url: impl Into<String>, body: Option<String>) -> Self {
        self.response_mut().config = Some(RequestConfig {
            url: Some(url.into()),
            data: body,
        });
        self
    }

    /// Records the API error body.
    #[must_use]
    pub fn with_body(mut self, status: Option<u16>, code: Option<String>) -> Self {
        self.response_mut().data = Some(ResponseBody {
            status,
            error: code.map(|code| ApiError { code: Some(code) }),
        });
        self
    }

    fn response_mut(&mut self) -> &mut ErrorResponse {
        self.response.get_or_insert_with(ErrorResponse::default)
    }

    /// HTTP status line code, if a response arrived.
    #[must_use]
    pub fn http_status(&self) -> Option<u16> {
        self.response.as_ref().and_then(|r| r.status)
    }

    #[must_use]
    pub fn request_url(&self) -> Option<&str> {
        self.request().and_then(|c| c.url.as_deref())
    }

    #[must_use]
    pub fn request_body(&self) -> Option<&str> {
        self.request().and_then(|c| c.data.as_deref())
    }

    /// Status echoed in the response body.
    #[must_use]
    pub fn body_status(&self) -> Option<u16> {
        self.body().and_then(|b| b.status)
    }

    /// Application error code from the response body.
    #[must_use]
    pub fn error_code(&self) -> Option<&str> {
        self.body()
            .and_then(|b| b.error.as_ref())
            .and_then(|e| e.code.as_deref())
    }

    fn request(&self) -> Option<&RequestConfig> {
        self.response.as_ref().and_then(|r| r.config.as_ref())
    }

    fn body(&self) -> Option<&ResponseBody> {
        self.response.as_ref().and_then(|r| r.data.as_ref())
    }
}
