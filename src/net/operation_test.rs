use super::*;

#[test]
fn operation_kinds_are_fixed_at_definition() {
    assert_eq!(GET_USERS.kind, OperationKind::Query);
    assert_eq!(GET_POSTS.kind, OperationKind::Query);
    assert_eq!(ADD_USER.kind, OperationKind::Mutation);
    assert_eq!(ADD_POST.kind, OperationKind::Mutation);
    assert_eq!(DELETE_USER.kind, OperationKind::Mutation);
    assert_eq!(DELETE_POST.kind, OperationKind::Mutation);
    assert_eq!(USERS_LIVE.kind, OperationKind::Subscription);
    assert_eq!(POSTS_LIVE.kind, OperationKind::Subscription);
}

#[test]
fn documents_name_their_operation() {
    for op in [
        GET_USERS, GET_POSTS, ADD_USER, ADD_POST, DELETE_USER, DELETE_POST, USERS_LIVE, POSTS_LIVE,
    ] {
        assert!(
            op.document.contains(op.name),
            "{} missing from its document",
            op.name
        );
    }
}

#[test]
fn insert_documents_follow_the_hasura_shape() {
    assert!(ADD_USER.document.contains("insert_users(objects:"));
    assert!(ADD_USER.document.contains("returning"));
    assert!(ADD_POST.document.contains("insert_posts(objects:"));
    assert!(ADD_POST.document.contains("$user_id: uuid!"));
}

#[test]
fn delete_documents_filter_by_id_equality() {
    assert!(DELETE_USER.document.contains("delete_users(where: { id: { _eq: $id } })"));
    assert!(DELETE_POST.document.contains("delete_posts(where: { id: { _eq: $id } })"));
}

#[test]
fn post_queries_traverse_the_user_relationship() {
    for op in [GET_POSTS, POSTS_LIVE] {
        assert!(op.document.contains("user {"), "{} lacks the author traversal", op.name);
    }
}

#[test]
fn add_user_variables_carry_exactly_name_and_email() {
    let vars = add_user_variables("Ada", "ada@example.com");
    assert_eq!(vars, serde_json::json!({ "name": "Ada", "email": "ada@example.com" }));
}

#[test]
fn add_post_variables_carry_user_id_title_and_content() {
    let vars = add_post_variables("u-1", "Hello", "World");
    assert_eq!(
        vars,
        serde_json::json!({ "user_id": "u-1", "title": "Hello", "content": "World" })
    );
}

#[test]
fn delete_variables_carry_the_id_alone() {
    let vars = delete_by_id_variables("u-1");
    assert_eq!(vars, serde_json::json!({ "id": "u-1" }));
}
