use super::*;
use crate::net::operation::{POSTS_LIVE, USERS_LIVE};

fn next_frame(data: serde_json::Value) -> GraphQlResponse {
    GraphQlResponse { data: Some(data), errors: None }
}

#[test]
fn client_messages_serialize_with_protocol_tags() {
    let init = ClientMessage::ConnectionInit {
        payload: Some(serde_json::json!({ "headers": { "x-hasura-admin-secret": "s" } })),
    };
    let wire = serde_json::to_value(&init).expect("serialize");
    assert_eq!(wire["type"], "connection_init");
    assert_eq!(wire["payload"]["headers"]["x-hasura-admin-secret"], "s");

    let subscribe = ClientMessage::Subscribe {
        id: "sub-1".to_owned(),
        payload: GraphQlRequest::new(&USERS_LIVE, serde_json::json!({})),
    };
    let wire = serde_json::to_value(&subscribe).expect("serialize");
    assert_eq!(wire["type"], "subscribe");
    assert_eq!(wire["id"], "sub-1");
    assert_eq!(wire["payload"]["operationName"], "UsersLive");

    let complete = ClientMessage::Complete { id: "sub-1".to_owned() };
    let wire = serde_json::to_value(&complete).expect("serialize");
    assert_eq!(wire["type"], "complete");

    let wire = serde_json::to_value(&ClientMessage::Pong).expect("serialize");
    assert_eq!(wire["type"], "pong");
}

#[test]
fn server_messages_parse_from_protocol_json() {
    let ack: ServerMessage =
        serde_json::from_str(r#"{"type":"connection_ack"}"#).expect("ack");
    assert_eq!(ack, ServerMessage::ConnectionAck);

    let next: ServerMessage = serde_json::from_str(
        r#"{"type":"next","id":"sub-1","payload":{"data":{"users":[]}}}"#,
    )
    .expect("next");
    match next {
        ServerMessage::Next { id, payload } => {
            assert_eq!(id, "sub-1");
            assert_eq!(payload.data, Some(serde_json::json!({ "users": [] })));
        }
        other => panic!("expected next, got {other:?}"),
    }

    let ping: ServerMessage = serde_json::from_str(r#"{"type":"ping"}"#).expect("ping");
    assert_eq!(ping, ServerMessage::Ping);

    let complete: ServerMessage =
        serde_json::from_str(r#"{"type":"complete","id":"sub-1"}"#).expect("complete");
    assert_eq!(complete, ServerMessage::Complete { id: "sub-1".to_owned() });
}

#[test]
fn subscribe_registers_and_dispose_cancels_exactly_once() {
    let link = WsLink::default();
    let sub = link.subscribe(&USERS_LIVE, serde_json::json!({}));
    assert_eq!(link.registered(), 1);
    assert!(!sub.handle.is_disposed());

    sub.handle.dispose();
    assert!(sub.handle.is_disposed());
    assert_eq!(link.registered(), 0);

    // Further calls are no-ops.
    sub.handle.dispose();
    sub.handle.dispose();
    assert_eq!(link.registered(), 0);
}

#[test]
fn deliver_routes_frames_by_registration_id() {
    let link = WsLink::default();
    let mut users = link.subscribe(&USERS_LIVE, serde_json::json!({}));
    let mut posts = link.subscribe(&POSTS_LIVE, serde_json::json!({}));

    link.deliver(
        users.handle.id(),
        next_frame(serde_json::json!({ "users": [{ "id": "u-1" }] })),
    );

    let frame = users.frames.try_next().expect("frame").expect("open");
    assert_eq!(frame, serde_json::json!({ "users": [{ "id": "u-1" }] }));
    assert!(posts.frames.try_next().is_err(), "posts stream must stay empty and open");
}

#[test]
fn deliver_to_an_unknown_id_is_ignored() {
    let link = WsLink::default();
    let mut users = link.subscribe(&USERS_LIVE, serde_json::json!({}));

    link.deliver("missing", next_frame(serde_json::json!({ "users": [] })));

    assert!(users.frames.try_next().is_err());
    assert_eq!(link.registered(), 1);
}

#[test]
fn an_errored_frame_ends_the_registration() {
    let link = WsLink::default();
    let mut users = link.subscribe(&USERS_LIVE, serde_json::json!({}));

    let id = users.handle.id().to_owned();
    link.deliver(
        &id,
        GraphQlResponse {
            data: None,
            errors: Some(vec![crate::net::types::GraphQlError {
                message: "subscription lost".to_owned(),
            }]),
        },
    );

    assert_eq!(link.registered(), 0);
    assert_eq!(users.frames.try_next().expect("closed"), None);
}

#[test]
fn server_complete_ends_the_registration() {
    let link = WsLink::default();
    let mut users = link.subscribe(&USERS_LIVE, serde_json::json!({}));

    let id = users.handle.id().to_owned();
    link.finish(&id);

    assert_eq!(link.registered(), 0);
    assert_eq!(users.frames.try_next().expect("closed"), None);
}

#[test]
fn closed_subscription_is_born_disposed() {
    let link = WsLink::default();
    let mut sub = link.closed_subscription();
    assert!(sub.handle.is_disposed());
    assert_eq!(sub.frames.try_next().expect("closed"), None);
    assert_eq!(link.registered(), 0);
}

#[test]
fn registrations_survive_a_disconnect() {
    let link = WsLink::default();
    let _users = link.subscribe(&USERS_LIVE, serde_json::json!({}));
    let _posts = link.subscribe(&POSTS_LIVE, serde_json::json!({}));

    link.mark_disconnected();
    assert_eq!(link.registered(), 2);

    // Reconnect re-issues subscribe for everything still registered; with no
    // writer spawned this only flips the flag, but must not lose entries.
    link.mark_connected();
    assert_eq!(link.registered(), 2);
}
