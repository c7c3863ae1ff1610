//! Top navigation bar with the current user and logout.

use leptos::prelude::*;

use crate::net::api;
use crate::net::policy::{Navigator, Notifier};
use crate::routes;
use crate::state::navigation::NavigationState;
use crate::state::notifications::NotificationState;
use crate::state::session::SessionStore;

#[component]
pub fn NavBar() -> impl IntoView {
    let store = expect_context::<SessionStore>();
    let notifications = expect_context::<RwSignal<NotificationState>>();
    let navigation = expect_context::<RwSignal<NavigationState>>();
    let busy = RwSignal::new(false);

    let view_store = store.clone();
    let session = Memo::new(move |_| view_store.session());

    let on_logout = move |_: leptos::ev::MouseEvent| {
        if busy.get_untracked() {
            return;
        }
        busy.set(true);
        let store = store.clone();
        leptos::task::spawn_local(async move {
            if api::user_logout(store.client()).await.is_ok() {
                store.clear();
                notifications.success("Logged out");
                navigation.push(routes::USER_LOGIN);
            }
            busy.set(false);
        });
    };

    view! {
        <header class="nav-bar">
            <a class="nav-bar__brand" href=routes::HOME>"User Center"</a>
            <nav class="nav-bar__links">
                <a href=routes::HOME>"Home"</a>
                <Show when=move || session.with(|s| s.is_admin())>
                    <a href=routes::ADMIN_USER_MANAGE>"User Management"</a>
                </Show>
            </nav>
            <div class="nav-bar__user">
                <span class="nav-bar__name">{move || session.with(|s| s.display_name().to_owned())}</span>
                <Show
                    when=move || session.with(|s| s.is_logged_in())
                    fallback=|| view! { <a class="nav-bar__login" href=routes::USER_LOGIN>"Log in"</a> }
                >
                    <button class="nav-bar__logout" on:click=on_logout.clone() disabled=move || busy.get()>
                        "Log out"
                    </button>
                </Show>
            </div>
        </header>
    }
}
