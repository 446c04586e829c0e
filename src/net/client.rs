//! The shared GraphQL client: configuration, transport selection, dispatch.

#[cfg(test)]
#[path = "client_test.rs"]
mod client_test;

use std::rc::Rc;

use leptos::prelude::{LocalStorage, StoredValue};
use serde_json::Value;

use crate::net::http_link;
use crate::net::operation::{Operation, OperationKind};
use crate::net::types::{GraphQlRequest, NetError};
use crate::net::ws_link::{Subscription, WsLink};

/// Connection settings for both links. Built once at startup and handed to
/// [`GraphQlClient::new`]; nothing else in the crate reads the environment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// HTTPS endpoint for queries and mutations.
    pub http_url: String,
    /// Secure WebSocket endpoint for subscriptions.
    pub ws_url: String,
    /// Hasura admin secret, sent as a header over HTTP and as a
    /// connection-time parameter on the socket.
    pub admin_secret: String,
}

impl ClientConfig {
    /// Read the endpoints and secret from compile-time environment variables,
    /// falling back to a local Hasura instance for development. Production
    /// builds supply `GRAPHDECK_HTTP_URL`, `GRAPHDECK_WS_URL`, and
    /// `GRAPHDECK_ADMIN_SECRET`.
    #[must_use]
    pub fn from_build_env() -> Self {
        Self {
            http_url: option_env!("GRAPHDECK_HTTP_URL")
                .unwrap_or("http://localhost:8080/v1/graphql")
                .to_owned(),
            ws_url: option_env!("GRAPHDECK_WS_URL")
                .unwrap_or("ws://localhost:8080/v1/graphql")
                .to_owned(),
            admin_secret: option_env!("GRAPHDECK_ADMIN_SECRET")
                .unwrap_or_default()
                .to_owned(),
        }
    }
}

/// How the client travels through Leptos context. The client holds `Rc`
/// internals, so it rides in browser-local storage rather than the
/// thread-safe arena.
pub type SharedClient = StoredValue<GraphQlClient, LocalStorage>;

/// The two links an operation can be carried by.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transport {
    /// Request/response HTTP, one round trip per call.
    Http,
    /// The persistent graphql-transport-ws socket.
    Socket,
}

/// Pure transport classification: subscriptions ride the socket, everything
/// else rides HTTP. Applied independently to every dispatch.
#[must_use]
pub fn transport_for(kind: OperationKind) -> Transport {
    match kind {
        OperationKind::Subscription => Transport::Socket,
        OperationKind::Query | OperationKind::Mutation => Transport::Http,
    }
}

/// Process-wide GraphQL client over both links.
///
/// Constructed once in the app shell and injected into the view layer via
/// context. Clones share the same socket link and registry.
#[derive(Clone)]
pub struct GraphQlClient {
    config: Rc<ClientConfig>,
    socket: WsLink,
}

impl GraphQlClient {
    #[must_use]
    pub fn new(config: ClientConfig) -> Self {
        Self {
            config: Rc::new(config),
            socket: WsLink::default(),
        }
    }

    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Issue a query over the HTTP link.
    ///
    /// # Errors
    ///
    /// Any [`NetError`]; passing a subscription operation is rejected rather
    /// than silently rerouted.
    pub async fn query(&self, operation: &Operation, variables: Value) -> Result<Value, NetError> {
        self.call(operation, variables).await
    }

    /// Issue a mutation over the HTTP link.
    ///
    /// Delivery is at-least-once: no idempotency key is attached, so a
    /// caller-level retry can duplicate an insert. Callers must not retry
    /// automatically.
    ///
    /// # Errors
    ///
    /// Any [`NetError`]; passing a subscription operation is rejected.
    pub async fn mutate(&self, operation: &Operation, variables: Value) -> Result<Value, NetError> {
        self.call(operation, variables).await
    }

    async fn call(&self, operation: &Operation, variables: Value) -> Result<Value, NetError> {
        match transport_for(operation.kind) {
            Transport::Http => {
                let request = GraphQlRequest::new(operation, variables);
                http_link::execute(&self.config, &request).await
            }
            Transport::Socket => Err(NetError::Transport(format!(
                "{} is a subscription and must be registered on the socket link",
                operation.name
            ))),
        }
    }

    /// Register a subscription on the socket link.
    ///
    /// Returns the frame stream plus a handle whose `dispose()` cancels the
    /// registration. Non-subscription operations yield an already-closed
    /// stream instead of being rerouted.
    #[must_use]
    pub fn subscribe(&self, operation: &Operation, variables: Value) -> Subscription {
        match transport_for(operation.kind) {
            Transport::Socket => self.socket.subscribe(operation, variables),
            Transport::Http => {
                leptos::logging::warn!(
                    "refusing to register {} on the socket link",
                    operation.name
                );
                self.socket.closed_subscription()
            }
        }
    }

    /// Open the persistent socket and keep it alive for the rest of the
    /// session, reconnecting with backoff. Call once at startup.
    #[cfg(feature = "hydrate")]
    pub fn spawn_socket(&self, ui: leptos::prelude::RwSignal<crate::state::ui::UiState>) {
        self.socket.spawn(&self.config, ui);
    }
}
