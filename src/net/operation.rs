//! Static GraphQL operation definitions and their variable builders.
//!
//! Every operation the app can issue is declared here as a constant with its
//! kind fixed at definition time. The documents reproduce the Hasura contract:
//! `insert_*(objects: …) { returning { … } }` for inserts and
//! `delete_*(where: {id: {_eq: …}})` for deletes, with the post author name
//! reached through the `user` relationship.

#[cfg(test)]
#[path = "operation_test.rs"]
mod operation_test;

use serde_json::{Value, json};

/// The three GraphQL operation classes, tagged once when the operation is
/// defined.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OperationKind {
    Query,
    Mutation,
    Subscription,
}

/// A static description of one GraphQL operation: its name (also sent as
/// `operationName`), its kind, and the full document text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Operation {
    pub name: &'static str,
    pub kind: OperationKind,
    pub document: &'static str,
}

pub const GET_USERS: Operation = Operation {
    name: "GetUsers",
    kind: OperationKind::Query,
    document: "\
query GetUsers {
  users {
    id
    name
    email
  }
}",
};

pub const GET_POSTS: Operation = Operation {
    name: "GetPosts",
    kind: OperationKind::Query,
    document: "\
query GetPosts {
  posts {
    id
    title
    content
    user {
      name
    }
  }
}",
};

pub const ADD_USER: Operation = Operation {
    name: "AddUser",
    kind: OperationKind::Mutation,
    document: "\
mutation AddUser($name: String!, $email: String!) {
  insert_users(objects: { name: $name, email: $email }) {
    returning {
      id
      name
      email
    }
  }
}",
};

pub const ADD_POST: Operation = Operation {
    name: "AddPost",
    kind: OperationKind::Mutation,
    document: "\
mutation AddPost($user_id: uuid!, $title: String!, $content: String!) {
  insert_posts(objects: { user_id: $user_id, title: $title, content: $content }) {
    returning {
      id
      title
      content
    }
  }
}",
};

pub const DELETE_USER: Operation = Operation {
    name: "DeleteUser",
    kind: OperationKind::Mutation,
    document: "\
mutation DeleteUser($id: uuid!) {
  delete_users(where: { id: { _eq: $id } }) {
    returning {
      id
    }
  }
}",
};

pub const DELETE_POST: Operation = Operation {
    name: "DeletePost",
    kind: OperationKind::Mutation,
    document: "\
mutation DeletePost($id: uuid!) {
  delete_posts(where: { id: { _eq: $id } }) {
    returning {
      id
    }
  }
}",
};

pub const USERS_LIVE: Operation = Operation {
    name: "UsersLive",
    kind: OperationKind::Subscription,
    document: "\
subscription UsersLive {
  users {
    id
    name
    email
  }
}",
};

pub const POSTS_LIVE: Operation = Operation {
    name: "PostsLive",
    kind: OperationKind::Subscription,
    document: "\
subscription PostsLive {
  posts {
    id
    title
    content
    user {
      name
    }
  }
}",
};

/// Variables for [`ADD_USER`]: exactly `name` and `email`.
#[must_use]
pub fn add_user_variables(name: &str, email: &str) -> Value {
    json!({ "name": name, "email": email })
}

/// Variables for [`ADD_POST`]: exactly `user_id`, `title`, and `content`.
#[must_use]
pub fn add_post_variables(user_id: &str, title: &str, content: &str) -> Value {
    json!({ "user_id": user_id, "title": title, "content": content })
}

/// Variables for [`DELETE_USER`] / [`DELETE_POST`]: the id and nothing else.
#[must_use]
pub fn delete_by_id_variables(id: &str) -> Value {
    json!({ "id": id })
}
