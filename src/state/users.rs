#[cfg(test)]
#[path = "users_test.rs"]
mod users_test;

/// One user row as returned by the backend.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
}

/// Cached user collection. Each subscription frame replaces `items`
/// wholesale; the server is the single source of truth.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UsersState {
    pub items: Vec<User>,
    pub loading: bool,
    pub load_failed: bool,
}
