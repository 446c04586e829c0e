//! Card for one post with a delete action.

use leptos::prelude::*;

use crate::net::client::SharedClient;
use crate::state::posts::Post;
use crate::state::ui::UiState;

/// Post card showing title, content, and the author name from the
/// relationship traversal, with a delete button issuing a single
/// delete-post mutation keyed by id.
#[component]
pub fn PostCard(post: Post) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let client = expect_context::<SharedClient>();

    let title = post.title.clone();
    let content = post.content.clone();
    let author = post.author_name().to_owned();
    let id = post.id;

    let on_delete = move |_| {
        let client = client.get_value();
        let id = id.clone();
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            use crate::net::operation::{DELETE_POST, delete_by_id_variables};
            match client.mutate(&DELETE_POST, delete_by_id_variables(&id)).await {
                Ok(_) => ui.update(UiState::post_deleted),
                Err(e) => {
                    leptos::logging::warn!("delete post failed: {e}");
                    ui.update(UiState::post_delete_failed);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (client, id);
    };

    view! {
        <div class="card">
            <div class="card__body">
                <span class="card__title">{title}</span>
                <p class="card__text">{content}</p>
                <span class="card__subtitle">{format!("by {author}")}</span>
            </div>
            <button class="card__delete" title="Delete post" on:click=on_delete>
                "Delete"
            </button>
        </div>
    }
}
