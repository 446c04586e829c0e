//! Top app bar with the title and the socket status indicator.

use leptos::prelude::*;

use crate::state::ui::{ConnectionStatus, UiState};

/// App bar across the top of the page.
#[component]
pub fn TopBar() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let status_class = move || match ui.get().connection_status {
        ConnectionStatus::Connected => "topbar__dot topbar__dot--connected",
        ConnectionStatus::Connecting => "topbar__dot topbar__dot--connecting",
        ConnectionStatus::Disconnected => "topbar__dot topbar__dot--disconnected",
    };

    let status_label = move || match ui.get().connection_status {
        ConnectionStatus::Connected => "Live",
        ConnectionStatus::Connecting => "Connecting...",
        ConnectionStatus::Disconnected => "Offline",
    };

    view! {
        <header class="topbar">
            <span class="topbar__title">"Graphdeck"</span>
            <span class="topbar__spacer"></span>
            <span class="topbar__status">
                <span class=status_class></span>
                {status_label}
            </span>
        </header>
    }
}
