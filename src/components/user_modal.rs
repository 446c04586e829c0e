//! Modal dialog for adding a user.

use leptos::prelude::*;

use crate::net::client::SharedClient;
use crate::state::ui::UiState;

/// Add-user form. Submission issues exactly one create-user mutation with
/// the typed name and email. On success the fields reset and the modal
/// closes; on failure both stay as they are so the error can be corrected
/// in context.
#[component]
pub fn UserModal() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let client = expect_context::<SharedClient>();

    // Copyable so the click and keydown handlers each get their own.
    let submit = move || {
        let form = ui.get_untracked().user_form;
        if !form.is_complete() {
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            let client = client.get_value();
            leptos::task::spawn_local(async move {
                use crate::net::operation::{ADD_USER, add_user_variables};
                let variables = add_user_variables(&form.name, &form.email);
                match client.mutate(&ADD_USER, variables).await {
                    Ok(_) => ui.update(UiState::user_saved),
                    Err(e) => {
                        leptos::logging::warn!("add user failed: {e}");
                        ui.update(UiState::user_save_failed);
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
                <h2>"Add User"</h2>
                <label class="dialog__label">
                    "Name"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || ui.get().user_form.name
                        on:input=move |ev| {
                            ui.update(|u| u.user_form.name = event_target_value(&ev));
                        }
                    />
                </label>
                <label class="dialog__label">
                    "Email"
                    <input
                        class="dialog__input"
                        type="email"
                        prop:value=move || ui.get().user_form.email
                        on:input=move |ev| {
                            ui.update(|u| u.user_form.email = event_target_value(&ev));
                        }
                        on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                            if ev.key() == "Enter" {
                                ev.prevent_default();
                                submit();
                            }
                        }
                    />
                </label>
                <div class="dialog__actions">
                    <button class="btn" on:click=on_close>
                        "Cancel"
                    </button>
                    <button
                        class="btn btn--primary"
                        disabled=move || !ui.get().user_form.is_complete()
                        on:click=move |_| submit()
                    >
                        "Add"
                    </button>
                </div>
            </div>
        </div>
    }
}
