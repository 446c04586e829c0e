use super::*;
use crate::net::operation::ADD_USER;

#[test]
fn request_carries_document_and_operation_name() {
    let request = GraphQlRequest::new(&ADD_USER, serde_json::json!({ "name": "Ada" }));
    assert_eq!(request.query, ADD_USER.document);
    assert_eq!(request.operation_name, "AddUser");

    let wire = serde_json::to_value(&request).expect("serialize");
    assert_eq!(wire["operationName"], "AddUser");
}

#[test]
fn into_data_returns_the_data_value() {
    let resp = GraphQlResponse {
        data: Some(serde_json::json!({ "users": [] })),
        errors: None,
    };
    assert_eq!(resp.into_data().expect("data"), serde_json::json!({ "users": [] }));
}

#[test]
fn into_data_rejects_on_any_error_entry() {
    let resp = GraphQlResponse {
        data: Some(serde_json::json!({ "users": [] })),
        errors: Some(vec![GraphQlError { message: "constraint violation".to_owned() }]),
    };
    match resp.into_data() {
        Err(NetError::Rejected(msg)) => assert_eq!(msg, "constraint violation"),
        other => panic!("expected rejection, got {other:?}"),
    }
}

#[test]
fn into_data_flags_an_empty_envelope_as_malformed() {
    let resp = GraphQlResponse::default();
    assert!(matches!(resp.into_data(), Err(NetError::Decode(_))));
}

#[test]
fn error_entries_tolerate_extra_server_fields() {
    let raw = serde_json::json!({
        "errors": [{
            "message": "field not found",
            "extensions": { "code": "validation-failed", "path": "$.selectionSet" }
        }]
    });
    let resp: GraphQlResponse = serde_json::from_value(raw).expect("parse");
    let errors = resp.errors.expect("errors");
    assert_eq!(errors[0].message, "field not found");
}
