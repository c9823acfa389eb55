//! The `{success, data, message}` envelope every backend response follows.
//!
//! DESIGN
//! ======
//! Auth routes put extra members (`token`, `user`) beside the standard three,
//! so unknown top-level members are kept in `extra` instead of dropped. The
//! client returns the whole envelope; typed endpoints narrow it afterwards.

#[cfg(test)]
#[path = "envelope_test.rs"]
mod envelope_test;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{RequestError, request_failed_message};

fn absent<T>() -> Option<T> {
    None
}

/// Backend response envelope.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T = Value> {
    /// `Some(true)` on success; `None` when the backend omitted the flag.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success: Option<bool>,
    #[serde(default = "absent", skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Any other top-level members.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl<T> Default for ApiResponse<T> {
    fn default() -> Self {
        Self { success: None, data: None, message: None, extra: Map::new() }
    }
}

impl<T> ApiResponse<T> {
    /// Whether this envelope must be surfaced as an error for `status`.
    ///
    /// An explicit `success: false` always fails. A missing flag only fails
    /// alongside a non-2xx status, so bare payloads like `{token, user}` pass.
    #[must_use]
    pub fn is_failure(&self, status: u16) -> bool {
        match self.success {
            Some(flag) => !flag,
            None => !(200..300).contains(&status),
        }
    }

    /// Message to report when this envelope is a failure.
    #[must_use]
    pub fn failure_message(&self, status: u16) -> String {
        self.message
            .as_deref()
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .map_or_else(|| request_failed_message(status), ToOwned::to_owned)
    }
}

impl ApiResponse<Value> {
    /// Parse a raw response body and apply the failure rule.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError::Backend`] when the envelope reports failure
    /// (or the body is unreadable on a non-2xx status) and
    /// [`RequestError::Decode`] when a 2xx body is not an envelope.
    pub fn from_body(status: u16, body: &str) -> Result<Self, RequestError> {
        let envelope = match serde_json::from_str::<Self>(body) {
            Ok(envelope) => envelope,
            Err(err) if (200..300).contains(&status) => {
                return Err(RequestError::decode(status, format!("invalid JSON response: {err}")));
            }
            Err(_) => return Err(RequestError::backend(status, request_failed_message(status))),
        };
        if envelope.is_failure(status) {
            return Err(RequestError::backend(status, envelope.failure_message(status)));
        }
        Ok(envelope)
    }

    /// Decode `data` into `T`, keeping the rest of the envelope.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError::Decode`] when `data` does not match `T`.
    pub fn decode<T: DeserializeOwned>(self) -> Result<ApiResponse<T>, RequestError> {
        let data = match self.data {
            Some(Value::Null) | None => None,
            Some(value) => Some(
                serde_json::from_value(value)
                    .map_err(|err| RequestError::decode(200, format!("unexpected `data` shape: {err}")))?,
            ),
        };
        Ok(ApiResponse { success: self.success, data, message: self.message, extra: self.extra })
    }

    /// Decode `data`, failing when it is absent.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError::Decode`] when `data` is missing or mistyped.
    pub fn into_data<T: DeserializeOwned>(self) -> Result<T, RequestError> {
        self.decode()?.data.ok_or_else(|| RequestError::decode(200, "response is missing `data`"))
    }

    /// Decode `data` as a list, treating an absent list as empty.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError::Decode`] when `data` is present but mistyped.
    pub fn into_list<T: DeserializeOwned>(self) -> Result<Vec<T>, RequestError> {
        Ok(self.decode()?.data.unwrap_or_default())
    }

    /// Look up a member by name: top level first, then inside `data`.
    #[must_use]
    pub fn member(&self, name: &str) -> Option<&Value> {
        self.extra
            .get(name)
            .or_else(|| self.data.as_ref().and_then(|data| data.get(name)))
            .filter(|value| !value.is_null())
    }

    /// Decode a named member (see [`Self::member`]).
    ///
    /// # Errors
    ///
    /// Returns [`RequestError::Decode`] when the member is missing or mistyped.
    pub fn member_as<T: DeserializeOwned>(&self, name: &str) -> Result<T, RequestError> {
        let value = self
            .member(name)
            .ok_or_else(|| RequestError::decode(200, format!("response is missing `{name}`")))?;
        serde_json::from_value(value.clone())
            .map_err(|err| RequestError::decode(200, format!("unexpected `{name}` shape: {err}")))
    }
}
