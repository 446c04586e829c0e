//! Card for one user with a delete action.

use leptos::prelude::*;

use crate::net::client::SharedClient;
use crate::state::ui::UiState;
use crate::state::users::User;

/// User card showing name and email, with a delete button issuing a single
/// delete-user mutation keyed by id.
#[component]
pub fn UserCard(user: User) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let client = expect_context::<SharedClient>();

    let name = user.name.clone();
    let email = user.email.clone();
    let id = user.id;

    let on_delete = move |_| {
        let client = client.get_value();
        let id = id.clone();
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            use crate::net::operation::{DELETE_USER, delete_by_id_variables};
            match client.mutate(&DELETE_USER, delete_by_id_variables(&id)).await {
                Ok(_) => ui.update(UiState::user_deleted),
                Err(e) => {
                    leptos::logging::warn!("delete user failed: {e}");
                    ui.update(UiState::user_delete_failed);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (client, id);
    };

    view! {
        <div class="card">
            <div class="card__body">
                <span class="card__title">{name}</span>
                <span class="card__subtitle">{email}</span>
            </div>
            <button class="card__delete" title="Delete user" on:click=on_delete>
                "Delete"
            </button>
        </div>
    }
}
