//! Persistent subscription link speaking graphql-transport-ws.
//!
//! One WebSocket is opened for the whole session and carries every
//! subscription registration and its frames. The connect loop manages the
//! socket lifecycle: `connection_init` with the admin secret as a
//! connection-time parameter, reconnection with exponential backoff, and
//! re-issuing `subscribe` for every registration that survives a drop.
//!
//! The wire message types and the registration bookkeeping are free of
//! browser APIs so they can be exercised natively; only the socket loop is
//! gated behind `hydrate`.
//!
//! No idle or handshake timeout is applied beyond the browser's WebSocket
//! defaults.

#[cfg(test)]
#[path = "ws_link_test.rs"]
mod ws_link_test;

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use futures::channel::mpsc;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::net::operation::Operation;
use crate::net::types::{GraphQlRequest, GraphQlResponse};

/// Messages the client writes onto the socket.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientMessage {
    ConnectionInit {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        payload: Option<Value>,
    },
    Subscribe {
        id: String,
        payload: GraphQlRequest,
    },
    Complete {
        id: String,
    },
    Pong,
}

/// Messages the server writes back. Optional payloads on `connection_ack`
/// and `ping` are ignored.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerMessage {
    ConnectionAck,
    Next {
        id: String,
        payload: GraphQlResponse,
    },
    Error {
        id: String,
        payload: Value,
    },
    Complete {
        id: String,
    },
    Ping,
    Pong,
}

struct Registered {
    request: GraphQlRequest,
    sender: mpsc::UnboundedSender<Value>,
}

type Registry = Rc<RefCell<HashMap<String, Registered>>>;

/// An active subscription: the stream of `data` frames plus its cancellation
/// handle. The stream ends when the server completes or errors the
/// registration, or when the handle is disposed.
pub struct Subscription {
    pub frames: mpsc::UnboundedReceiver<Value>,
    pub handle: SubscriptionHandle,
}

/// Cancellation handle for one registration.
pub struct SubscriptionHandle {
    id: String,
    link: WsLink,
    disposed: Cell<bool>,
}

impl SubscriptionHandle {
    /// Cancel the registration: remove it from the registry and, when the
    /// socket is up, send `complete` so the server releases its resources.
    /// Safe to call any number of times; only the first call acts.
    pub fn dispose(&self) {
        if self.disposed.replace(true) {
            return;
        }
        self.link.registry.borrow_mut().remove(&self.id);
        if self.link.connected.get() {
            let _ = self.link.send(&ClientMessage::Complete { id: self.id.clone() });
        }
    }

    #[must_use]
    pub fn is_disposed(&self) -> bool {
        self.disposed.get()
    }

    /// The registration id this handle controls.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }
}

/// The shared socket link. Clones share one outgoing channel, one registry,
/// and one connection flag.
#[derive(Clone, Default)]
pub struct WsLink {
    outgoing: Rc<RefCell<Option<mpsc::UnboundedSender<String>>>>,
    registry: Registry,
    connected: Rc<Cell<bool>>,
}

impl WsLink {
    /// Register a subscription. The `subscribe` message goes out immediately
    /// when the socket is acknowledged; otherwise the connect loop sends it
    /// on the next `connection_ack`.
    #[must_use]
    pub fn subscribe(&self, operation: &Operation, variables: Value) -> Subscription {
        let id = uuid::Uuid::new_v4().to_string();
        let (tx, rx) = mpsc::unbounded();
        let request = GraphQlRequest::new(operation, variables);

        self.registry.borrow_mut().insert(
            id.clone(),
            Registered { request: request.clone(), sender: tx },
        );
        if self.connected.get() {
            let _ = self.send(&ClientMessage::Subscribe { id: id.clone(), payload: request });
        }

        Subscription {
            frames: rx,
            handle: SubscriptionHandle {
                id,
                link: self.clone(),
                disposed: Cell::new(false),
            },
        }
    }

    /// A subscription whose stream is already closed and whose handle is a
    /// no-op. Used when a non-subscription operation is refused.
    #[must_use]
    pub fn closed_subscription(&self) -> Subscription {
        let (tx, rx) = mpsc::unbounded();
        drop(tx);
        Subscription {
            frames: rx,
            handle: SubscriptionHandle {
                id: String::new(),
                link: self.clone(),
                disposed: Cell::new(true),
            },
        }
    }

    /// Number of live registrations.
    #[must_use]
    pub fn registered(&self) -> usize {
        self.registry.borrow().len()
    }

    /// Serialize and queue one message for the socket writer. Returns `false`
    /// when no connect loop has been spawned or the channel is closed.
    fn send(&self, message: &ClientMessage) -> bool {
        let Ok(json) = serde_json::to_string(message) else {
            return false;
        };
        match &*self.outgoing.borrow() {
            Some(tx) => tx.unbounded_send(json).is_ok(),
            None => false,
        }
    }

    /// The server acknowledged the connection: flip the flag and re-issue
    /// `subscribe` for every live registration.
    pub(crate) fn mark_connected(&self) {
        self.connected.set(true);
        let registry = self.registry.borrow();
        for (id, registered) in registry.iter() {
            let _ = self.send(&ClientMessage::Subscribe {
                id: id.clone(),
                payload: registered.request.clone(),
            });
        }
    }

    pub(crate) fn mark_disconnected(&self) {
        self.connected.set(false);
    }

    /// Route one `next` frame to its registration. A frame carrying errors,
    /// or a dropped receiver, ends the registration.
    pub(crate) fn deliver(&self, id: &str, payload: GraphQlResponse) {
        let mut registry = self.registry.borrow_mut();
        let ended = {
            let Some(registered) = registry.get(id) else {
                return;
            };
            match payload.into_data() {
                Ok(data) => registered.sender.unbounded_send(data).is_err(),
                Err(e) => {
                    leptos::logging::warn!("subscription {id} frame rejected: {e}");
                    true
                }
            }
        };
        if ended {
            registry.remove(id);
        }
    }

    /// The server errored the registration; closing the stream is the only
    /// signal the consumer gets.
    pub(crate) fn fail(&self, id: &str, payload: &Value) {
        leptos::logging::warn!("subscription {id} failed: {payload}");
        self.registry.borrow_mut().remove(id);
    }

    /// The server completed the registration.
    pub(crate) fn finish(&self, id: &str) {
        self.registry.borrow_mut().remove(id);
    }

    /// Spawn the connect loop. Call once; the socket stays up (reconnecting
    /// with backoff) for the rest of the session.
    #[cfg(feature = "hydrate")]
    pub(crate) fn spawn(
        &self,
        config: &crate::net::client::ClientConfig,
        ui: leptos::prelude::RwSignal<crate::state::ui::UiState>,
    ) {
        let (tx, rx) = mpsc::unbounded();
        *self.outgoing.borrow_mut() = Some(tx);
        leptos::task::spawn_local(run_loop(self.clone(), config.clone(), ui, rx));
    }
}

/// Connection loop with exponential backoff, after the teacher pattern of a
/// single long-lived client task owning the socket.
#[cfg(feature = "hydrate")]
async fn run_loop(
    link: WsLink,
    config: crate::net::client::ClientConfig,
    ui: leptos::prelude::RwSignal<crate::state::ui::UiState>,
    rx: mpsc::UnboundedReceiver<String>,
) {
    use crate::state::ui::ConnectionStatus;
    use leptos::prelude::Update;

    let rx = Rc::new(RefCell::new(rx));
    let mut backoff_ms: u32 = 1000;
    let max_backoff_ms: u32 = 10_000;

    loop {
        ui.update(|u| u.connection_status = ConnectionStatus::Connecting);

        match connect_and_pump(&link, &config, ui, &rx).await {
            Ok(()) => leptos::logging::log!("socket closed cleanly"),
            Err(e) => leptos::logging::warn!("socket error: {e}"),
        }

        link.mark_disconnected();
        ui.update(|u| u.connection_status = ConnectionStatus::Disconnected);

        gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(backoff_ms))).await;
        backoff_ms = (backoff_ms * 2).min(max_backoff_ms);
    }
}

/// Open the socket, perform the graphql-transport-ws handshake, and pump
/// messages both ways until the connection drops.
#[cfg(feature = "hydrate")]
async fn connect_and_pump(
    link: &WsLink,
    config: &crate::net::client::ClientConfig,
    ui: leptos::prelude::RwSignal<crate::state::ui::UiState>,
    rx: &Rc<RefCell<mpsc::UnboundedReceiver<String>>>,
) -> Result<(), String> {
    use futures::{SinkExt, StreamExt};
    use gloo_net::websocket::Message;
    use gloo_net::websocket::futures::WebSocket;

    let ws = WebSocket::open_with_protocol(&config.ws_url, "graphql-transport-ws")
        .map_err(|e| e.to_string())?;
    let (mut ws_write, mut ws_read) = ws.split();

    // The secret travels in the init payload, not as per-message headers.
    let init = ClientMessage::ConnectionInit {
        payload: Some(serde_json::json!({
            "headers": { "x-hasura-admin-secret": config.admin_secret }
        })),
    };
    let init = serde_json::to_string(&init).map_err(|e| e.to_string())?;
    ws_write
        .send(Message::Text(init))
        .await
        .map_err(|e| e.to_string())?;

    // Forward queued outgoing messages to the socket.
    let mut rx_borrow = rx.borrow_mut();
    let send_task = async {
        while let Some(msg) = rx_borrow.next().await {
            if ws_write.send(Message::Text(msg)).await.is_err() {
                break;
            }
        }
    };

    // Receive loop: decode and dispatch server messages.
    let recv_task = async {
        while let Some(msg) = ws_read.next().await {
            match msg {
                Ok(Message::Text(text)) => match serde_json::from_str::<ServerMessage>(&text) {
                    Ok(message) => dispatch(link, ui, message),
                    Err(e) => leptos::logging::warn!("unrecognized socket message: {e}"),
                },
                Ok(Message::Bytes(_)) => {}
                Err(e) => {
                    leptos::logging::warn!("socket recv error: {e}");
                    break;
                }
            }
        }
    };

    // When either side finishes, the connection is done.
    futures::future::select(Box::pin(send_task), Box::pin(recv_task)).await;

    Ok(())
}

#[cfg(feature = "hydrate")]
fn dispatch(
    link: &WsLink,
    ui: leptos::prelude::RwSignal<crate::state::ui::UiState>,
    message: ServerMessage,
) {
    use crate::state::ui::ConnectionStatus;
    use leptos::prelude::Update;

    match message {
        ServerMessage::ConnectionAck => {
            link.mark_connected();
            ui.update(|u| u.connection_status = ConnectionStatus::Connected);
        }
        ServerMessage::Next { id, payload } => link.deliver(&id, payload),
        ServerMessage::Error { id, payload } => link.fail(&id, &payload),
        ServerMessage::Complete { id } => link.finish(&id),
        ServerMessage::Ping => {
            let _ = link.send(&ClientMessage::Pong);
        }
        ServerMessage::Pong => {}
    }
}
