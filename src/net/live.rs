//! Live collection sync.
//!
//! The dashboard fetches both collections once over the HTTP link, then
//! registers the two subscriptions. Every incoming frame is a complete
//! authoritative snapshot of one collection and replaces that cached list
//! wholesale — last-writer-wins at collection granularity, with the other
//! collection untouched. Registrations are disposed when the view unmounts.

#[cfg(test)]
#[path = "live_test.rs"]
mod live_test;

use serde_json::Value;

use crate::state::posts::{Post, PostsState};
use crate::state::users::{User, UsersState};

/// Replace the cached user list from a snapshot frame. Returns `false` (and
/// changes nothing) when the frame does not carry a well-formed `users` list.
pub fn apply_users_frame(data: &Value, users: &mut UsersState) -> bool {
    let Some(list) = data.get("users") else {
        return false;
    };
    match serde_json::from_value::<Vec<User>>(list.clone()) {
        Ok(items) => {
            users.items = items;
            users.load_failed = false;
            true
        }
        Err(e) => {
            leptos::logging::warn!("malformed users frame: {e}");
            false
        }
    }
}

/// Replace the cached post list from a snapshot frame. Returns `false` (and
/// changes nothing) when the frame does not carry a well-formed `posts` list.
pub fn apply_posts_frame(data: &Value, posts: &mut PostsState) -> bool {
    let Some(list) = data.get("posts") else {
        return false;
    };
    match serde_json::from_value::<Vec<Post>>(list.clone()) {
        Ok(items) => {
            posts.items = items;
            posts.load_failed = false;
            true
        }
        Err(e) => {
            leptos::logging::warn!("malformed posts frame: {e}");
            false
        }
    }
}

/// Handles for the two live registrations; disposed together on unmount.
#[cfg(feature = "hydrate")]
pub struct LiveHandles {
    users: crate::net::ws_link::SubscriptionHandle,
    posts: crate::net::ws_link::SubscriptionHandle,
}

#[cfg(feature = "hydrate")]
impl LiveHandles {
    pub fn dispose(&self) {
        self.users.dispose();
        self.posts.dispose();
    }
}

/// Load both collections and keep them live until the returned handles are
/// disposed.
#[cfg(feature = "hydrate")]
pub fn start(
    client: &crate::net::client::GraphQlClient,
    users: leptos::prelude::RwSignal<UsersState>,
    posts: leptos::prelude::RwSignal<PostsState>,
) -> LiveHandles {
    use futures::StreamExt;
    use leptos::prelude::Update;

    use crate::net::operation::{GET_POSTS, GET_USERS, POSTS_LIVE, USERS_LIVE};
    use crate::net::ws_link::Subscription;

    users.update(|s| s.loading = true);
    posts.update(|s| s.loading = true);

    // Initial snapshots over the request/response link.
    {
        let client = client.clone();
        leptos::task::spawn_local(async move {
            match client.query(&GET_USERS, serde_json::json!({})).await {
                Ok(data) => users.update(|s| {
                    let _ = apply_users_frame(&data, s);
                    s.loading = false;
                }),
                Err(e) => {
                    leptos::logging::warn!("initial user fetch failed: {e}");
                    users.update(|s| {
                        s.loading = false;
                        s.load_failed = true;
                    });
                }
            }
        });
    }
    {
        let client = client.clone();
        leptos::task::spawn_local(async move {
            match client.query(&GET_POSTS, serde_json::json!({})).await {
                Ok(data) => posts.update(|s| {
                    let _ = apply_posts_frame(&data, s);
                    s.loading = false;
                }),
                Err(e) => {
                    leptos::logging::warn!("initial post fetch failed: {e}");
                    posts.update(|s| {
                        s.loading = false;
                        s.load_failed = true;
                    });
                }
            }
        });
    }

    // Live frames take over from here.
    let Subscription { frames: mut user_frames, handle: users_handle } =
        client.subscribe(&USERS_LIVE, serde_json::json!({}));
    leptos::task::spawn_local(async move {
        while let Some(data) = user_frames.next().await {
            users.update(|s| {
                let _ = apply_users_frame(&data, s);
            });
        }
    });

    let Subscription { frames: mut post_frames, handle: posts_handle } =
        client.subscribe(&POSTS_LIVE, serde_json::json!({}));
    leptos::task::spawn_local(async move {
        while let Some(data) = post_frames.next().await {
            posts.update(|s| {
                let _ = apply_posts_frame(&data, s);
            });
        }
    });

    LiveHandles { users: users_handle, posts: posts_handle }
}
