//! Root application component with routing and context providers.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::{
    nav_bar::NavBar, navigation_bridge::NavigationBridge, route_guard::RouteGuard, toasts::Toasts,
};
use crate::config::ClientConfig;
use crate::guard::NavigationGuard;
use crate::net::http::{BrowserTransport, HttpClient};
use crate::pages::{home::HomePage, login::LoginPage, register::RegisterPage, user_manage::UserManagePage};
use crate::state::{navigation::NavigationState, notifications::NotificationState, session::SessionStore};

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
/// Builds the HTTP client, session store and navigation guard, provides
/// them as context, and mounts the guarded routes.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ClientConfig::from_build_env().unwrap_or_else(|e| {
        leptos::logging::warn!("{e}; using default API config");
        ClientConfig::default()
    });

    let notifications = RwSignal::new(NotificationState::default());
    let navigation = RwSignal::new(NavigationState::default());

    let client = HttpClient::new(config, BrowserTransport, Arc::new(notifications), Arc::new(navigation));
    let session = SessionStore::new(client);
    let guard = NavigationGuard::new(session.clone(), Arc::new(notifications));

    provide_context(notifications);
    provide_context(navigation);
    provide_context(session);
    provide_context(guard);

    view! {
        <Stylesheet id="leptos" href="/pkg/lilac-admin.css"/>
        <Title text="User Center"/>

        <Router>
            <NavigationBridge/>
            <NavBar/>
            <Toasts/>
            <main class="app-main">
                <RouteGuard>
                    <Routes fallback=|| "Page not found.".into_view()>
                        <Route path=StaticSegment("") view=HomePage/>
                        <Route path=(StaticSegment("admin"), StaticSegment("userManage")) view=UserManagePage/>
                        <Route path=(StaticSegment("user"), StaticSegment("login")) view=LoginPage/>
                        <Route path=(StaticSegment("user"), StaticSegment("register")) view=RegisterPage/>
                    </Routes>
                </RouteGuard>
            </main>
        </Router>
    }
}
