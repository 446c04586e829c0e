//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::net::client::{ClientConfig, GraphQlClient};
use crate::pages::dashboard::DashboardPage;
use crate::state::{posts::PostsState, ui::UiState, users::UsersState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Builds the GraphQL client once from its explicit configuration and hands
/// it (plus the shared state signals) to child components via context. The
/// persistent socket is opened here and lives for the whole session.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let ui = RwSignal::new(UiState::default());
    let users = RwSignal::new(UsersState::default());
    let posts = RwSignal::new(PostsState::default());

    let client = GraphQlClient::new(ClientConfig::from_build_env());
    #[cfg(feature = "hydrate")]
    client.spawn_socket(ui);

    provide_context(ui);
    provide_context(users);
    provide_context(posts);
    provide_context(StoredValue::new_local(client));

    view! {
        <Stylesheet id="leptos" href="/pkg/graphdeck.css"/>
        <Title text="Graphdeck"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=DashboardPage/>
            </Routes>
        </Router>
    }
}
