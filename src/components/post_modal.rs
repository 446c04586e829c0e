//! Modal dialog for adding a post.

use leptos::prelude::*;

use crate::net::client::SharedClient;
use crate::state::ui::UiState;
use crate::state::users::UsersState;

/// Add-post form: author select over the current user list, title, and
/// content. Submission issues exactly one create-post mutation referencing
/// the selected user id. Success resets and closes; failure leaves the form
/// and the modal as they are.
#[component]
pub fn PostModal() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let users = expect_context::<RwSignal<UsersState>>();
    let client = expect_context::<SharedClient>();

    let submit = move || {
        let form = ui.get_untracked().post_form;
        if !form.is_complete() {
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            let client = client.get_value();
            leptos::task::spawn_local(async move {
                use crate::net::operation::{ADD_POST, add_post_variables};
                let variables = add_post_variables(&form.user_id, &form.title, &form.content);
                match client.mutate(&ADD_POST, variables).await {
                    Ok(_) => ui.update(UiState::post_saved),
                    Err(e) => {
                        leptos::logging::warn!("add post failed: {e}");
                        ui.update(UiState::post_save_failed);
                    }
                }
            });
        }

        #[cfg(not(feature = "hydrate"))]
        let _ = (client, form);
    };

    let on_close = move |_| ui.update(UiState::close_modal);

    view! {
        <div class="dialog-backdrop" on:click=on_close>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Add Post"</h2>
                <label class="dialog__label">
                    "Author"
                    <select
                        class="dialog__input"
                        prop:value=move || ui.get().post_form.user_id
                        on:change=move |ev| {
                            ui.update(|u| u.post_form.user_id = event_target_value(&ev));
                        }
                    >
                        <option value="">"Select author..."</option>
                        {move || {
                            users
                                .get()
                                .items
                                .into_iter()
                                .map(|user| {
                                    view! { <option value=user.id>{user.name}</option> }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </select>
                </label>
                <label class="dialog__label">
                    "Title"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || ui.get().post_form.title
                        on:input=move |ev| {
                            ui.update(|u| u.post_form.title = event_target_value(&ev));
                        }
                    />
                </label>
                <label class="dialog__label">
                    "Content"
                    <textarea
                        class="dialog__input dialog__input--multiline"
                        prop:value=move || ui.get().post_form.content
                        on:input=move |ev| {
                            ui.update(|u| u.post_form.content = event_target_value(&ev));
                        }
                    ></textarea>
                </label>
                <div class="dialog__actions">
                    <button class="btn" on:click=on_close>
                        "Cancel"
                    </button>
                    <button
                        class="btn btn--primary"
                        disabled=move || !ui.get().post_form.is_complete()
                        on:click=move |_| submit()
                    >
                        "Add"
                    </button>
                </div>
            </div>
        </div>
    }
}
