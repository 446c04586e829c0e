//! Dashboard page: tabbed users/posts collections with live updates.

use leptos::prelude::*;

use crate::components::post_card::PostCard;
use crate::components::post_modal::PostModal;
use crate::components::sidebar::Sidebar;
use crate::components::snackbar::Snackbar;
use crate::components::topbar::TopBar;
use crate::components::user_card::UserCard;
use crate::components::user_modal::UserModal;
use crate::state::posts::PostsState;
use crate::state::ui::{ActiveModal, ActiveTab, UiState};
use crate::state::users::UsersState;

/// The single page of the app: sidebar tab switch, card grid for the active
/// collection, add-entity modals, and the notice snackbar.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    // Register the live queries on mount and cancel the registrations when
    // the view unmounts.
    #[cfg(feature = "hydrate")]
    {
        let client = expect_context::<crate::net::client::SharedClient>();
        let users = expect_context::<RwSignal<UsersState>>();
        let posts = expect_context::<RwSignal<PostsState>>();
        let handles = StoredValue::new_local(crate::net::live::start(
            &client.get_value(),
            users,
            posts,
        ));
        on_cleanup(move || handles.with_value(crate::net::live::LiveHandles::dispose));
    }

    let heading = move || match ui.get().active_tab {
        ActiveTab::Users => "Users",
        ActiveTab::Posts => "Posts",
    };

    let add_label = move || match ui.get().active_tab {
        ActiveTab::Users => "+ Add User",
        ActiveTab::Posts => "+ Add Post",
    };

    let on_add = move |_| {
        ui.update(|u| {
            let modal = match u.active_tab {
                ActiveTab::Users => ActiveModal::AddUser,
                ActiveTab::Posts => ActiveModal::AddPost,
            };
            u.open_modal(modal);
        });
    };

    view! {
        <div class="dashboard">
            <TopBar/>
            <div class="dashboard__body">
                <Sidebar/>
                <main class="dashboard__content">
                    <header class="dashboard__header">
                        <h1>{heading}</h1>
                        <button class="btn btn--primary" on:click=on_add>
                            {add_label}
                        </button>
                    </header>

                    <Show when=move || ui.get().active_tab == ActiveTab::Users>
                        <UserGrid/>
                    </Show>
                    <Show when=move || ui.get().active_tab == ActiveTab::Posts>
                        <PostGrid/>
                    </Show>
                </main>
            </div>

            <Show when=move || ui.get().modal == Some(ActiveModal::AddUser)>
                <UserModal/>
            </Show>
            <Show when=move || ui.get().modal == Some(ActiveModal::AddPost)>
                <PostModal/>
            </Show>

            <Snackbar/>
        </div>
    }
}

#[component]
fn UserGrid() -> impl IntoView {
    let users = expect_context::<RwSignal<UsersState>>();

    view! {
        <div class="card-grid">
            {move || {
                let state = users.get();
                if state.loading {
                    return view! { <p class="card-grid__empty">"Loading users..."</p> }.into_any();
                }
                if state.items.is_empty() {
                    let text = if state.load_failed { "Could not load users" } else { "No users yet" };
                    return view! { <p class="card-grid__empty">{text}</p> }.into_any();
                }
                state
                    .items
                    .into_iter()
                    .map(|user| view! { <UserCard user=user/> })
                    .collect::<Vec<_>>()
                    .into_any()
            }}
        </div>
    }
}

#[component]
fn PostGrid() -> impl IntoView {
    let posts = expect_context::<RwSignal<PostsState>>();

    view! {
        <div class="card-grid">
            {move || {
                let state = posts.get();
                if state.loading {
                    return view! { <p class="card-grid__empty">"Loading posts..."</p> }.into_any();
                }
                if state.items.is_empty() {
                    let text = if state.load_failed { "Could not load posts" } else { "No posts yet" };
                    return view! { <p class="card-grid__empty">{text}</p> }.into_any();
                }
                state
                    .items
                    .into_iter()
                    .map(|post| view! { <PostCard post=post/> })
                    .collect::<Vec<_>>()
                    .into_any()
            }}
        </div>
    }
}
