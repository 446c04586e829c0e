#[cfg(test)]
#[path = "posts_test.rs"]
mod posts_test;

/// The owning user's display name, reached through the `user` relationship.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PostAuthor {
    pub name: String,
}

/// One post row as returned by the backend. The relationship can be absent
/// in malformed data; rendering falls back via [`Post::author_name`].
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Post {
    pub id: String,
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub user: Option<PostAuthor>,
}

impl Post {
    #[must_use]
    pub fn author_name(&self) -> &str {
        self.user.as_ref().map_or("Unknown", |u| u.name.as_str())
    }
}

/// Cached post collection. Each subscription frame replaces `items`
/// wholesale, independently of the user collection.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PostsState {
    pub items: Vec<Post>,
    pub loading: bool,
    pub load_failed: bool,
}
