//! Request/response link: one HTTPS POST per query or mutation.
//!
//! Client-side (hydrate): real calls via `gloo-net`. Server-side (SSR):
//! stubs returning [`NetError::Unavailable`] since the endpoint is only
//! reachable from the browser session.
//!
//! No application-level timeout is applied; the browser's fetch defaults
//! govern how long a call may hang.

#![allow(clippy::unused_async)]

use serde_json::Value;

use crate::net::client::ClientConfig;
use crate::net::types::{GraphQlRequest, NetError};

/// Execute one operation against the configured HTTP endpoint, authenticating
/// with the admin-secret header.
///
/// # Errors
///
/// [`NetError::Transport`] if the request never completes,
/// [`NetError::Status`] for non-2xx answers, and [`NetError::Rejected`] /
/// [`NetError::Decode`] from envelope reduction.
pub async fn execute(config: &ClientConfig, request: &GraphQlRequest) -> Result<Value, NetError> {
    #[cfg(feature = "hydrate")]
    {
        use crate::net::types::GraphQlResponse;

        let resp = gloo_net::http::Request::post(&config.http_url)
            .header("x-hasura-admin-secret", &config.admin_secret)
            .json(request)
            .map_err(|e| NetError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| NetError::Transport(e.to_string()))?;

        if !resp.ok() {
            return Err(NetError::Status(resp.status()));
        }

        let envelope: GraphQlResponse = resp
            .json()
            .await
            .map_err(|e| NetError::Decode(e.to_string()))?;
        envelope.into_data()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, request);
        Err(NetError::Unavailable)
    }
}
