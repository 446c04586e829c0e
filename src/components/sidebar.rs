//! Sidebar with the collection tabs.

use leptos::prelude::*;

use crate::state::posts::PostsState;
use crate::state::ui::{ActiveTab, UiState};
use crate::state::users::UsersState;

/// Tab list switching the main content between users and posts.
#[component]
pub fn Sidebar() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let users = expect_context::<RwSignal<UsersState>>();
    let posts = expect_context::<RwSignal<PostsState>>();

    let tab_class = move |tab: ActiveTab| {
        if ui.get().active_tab == tab {
            "sidebar__item sidebar__item--selected"
        } else {
            "sidebar__item"
        }
    };

    view! {
        <nav class="sidebar">
            <button
                class=move || tab_class(ActiveTab::Users)
                on:click=move |_| ui.update(|u| u.active_tab = ActiveTab::Users)
            >
                <span>"Users"</span>
                <span class="sidebar__count">{move || users.get().items.len()}</span>
            </button>
            <button
                class=move || tab_class(ActiveTab::Posts)
                on:click=move |_| ui.update(|u| u.active_tab = ActiveTab::Posts)
            >
                <span>"Posts"</span>
                <span class="sidebar__count">{move || posts.get().items.len()}</span>
            </button>
        </nav>
    }
}
