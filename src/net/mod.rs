//! GraphQL client layer: operation definitions, dual transports, live sync.
//!
//! DESIGN
//! ======
//! Queries and mutations travel over a request/response HTTP link; the
//! subscription operations travel over one long-lived WebSocket speaking
//! graphql-transport-ws. Routing is decided once per dispatch from the
//! operation's declared kind — never by re-parsing the document.

pub mod client;
pub mod http_link;
pub mod live;
pub mod operation;
pub mod types;
pub mod ws_link;
