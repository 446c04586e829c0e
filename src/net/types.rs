//! GraphQL wire envelope types and the network error taxonomy.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::net::operation::Operation;

/// Error surfaced by either transport. The view layer collapses every variant
/// into a generic notice; the distinctions exist for logs and tests.
#[derive(Debug, thiserror::Error)]
pub enum NetError {
    /// The request never completed (endpoint unreachable, socket drop).
    #[error("transport failure: {0}")]
    Transport(String),
    /// The endpoint answered with a non-success HTTP status.
    #[error("server returned status {0}")]
    Status(u16),
    /// The server executed the operation and rejected it.
    #[error("operation rejected: {0}")]
    Rejected(String),
    /// The response body did not match the expected envelope.
    #[error("malformed response: {0}")]
    Decode(String),
    /// Network calls are stubbed out when not running in the browser.
    #[error("not available outside the browser")]
    Unavailable,
}

/// Request envelope sent as the HTTP POST body and as the `subscribe` payload
/// on the socket.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GraphQlRequest {
    pub query: String,
    pub variables: Value,
    #[serde(rename = "operationName")]
    pub operation_name: String,
}

impl GraphQlRequest {
    #[must_use]
    pub fn new(operation: &Operation, variables: Value) -> Self {
        Self {
            query: operation.document.to_owned(),
            variables,
            operation_name: operation.name.to_owned(),
        }
    }
}

/// One entry of a GraphQL `errors` array. Extra fields (locations, path,
/// extensions) are ignored; only the message is ever surfaced.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GraphQlError {
    pub message: String,
}

/// Response envelope shared by the HTTP link and the socket's `next` payload.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphQlResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<GraphQlError>>,
}

impl GraphQlResponse {
    /// Reduce the envelope to its `data`, treating any entry in `errors` as a
    /// rejection regardless of whether partial data came back.
    ///
    /// # Errors
    ///
    /// [`NetError::Rejected`] when the errors array is non-empty and
    /// [`NetError::Decode`] when neither data nor errors are present.
    pub fn into_data(self) -> Result<Value, NetError> {
        if let Some(errors) = self.errors {
            if let Some(first) = errors.into_iter().next() {
                return Err(NetError::Rejected(first.message));
            }
        }
        self.data
            .ok_or_else(|| NetError::Decode("response carried neither data nor errors".to_owned()))
    }
}
