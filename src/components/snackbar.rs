//! Transient dismissible notification bar.

use leptos::prelude::*;

use crate::state::ui::{Severity, UiState};

/// Snackbar showing the current notice, with a close button and an
/// auto-dismiss timer. The notice sequence number keeps a stale timer from
/// clearing a newer notice.
#[component]
pub fn Snackbar() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    Effect::new(move || {
        let Some(notice) = ui.get().notice else {
            return;
        };

        #[cfg(feature = "hydrate")]
        {
            let seq = notice.seq;
            leptos::task::spawn_local(async move {
                gloo_timers::future::sleep(std::time::Duration::from_secs(4)).await;
                ui.update(|u| u.dismiss_notice_if_seq(seq));
            });
        }

        #[cfg(not(feature = "hydrate"))]
        let _ = notice;
    });

    view! {
        <Show when=move || ui.get().notice.is_some()>
            {move || {
                ui.get().notice.map(|notice| {
                    let class = match notice.severity {
                        Severity::Success => "snackbar snackbar--success",
                        Severity::Error => "snackbar snackbar--error",
                    };
                    view! {
                        <div class=class role="status">
                            <span class="snackbar__text">{notice.text}</span>
                            <button
                                class="snackbar__close"
                                title="Dismiss"
                                on:click=move |_| ui.update(UiState::dismiss_notice)
                            >
                                "\u{d7}"
                            </button>
                        </div>
                    }
                })
            }}
        </Show>
    }
}
