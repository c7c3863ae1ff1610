//! Login page: account + password, then back to the guarded destination.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::guard::redirect_target;
use crate::net::api;
use crate::net::policy::{Navigator, Notifier};
use crate::routes;
use crate::state::navigation::NavigationState;
use crate::state::notifications::NotificationState;
use crate::state::session::SessionStore;

pub const MAX_ACCOUNT_LEN: usize = 255;
pub const MIN_PASSWORD_LEN: usize = 6;
pub const MAX_PASSWORD_LEN: usize = 18;

/// Trim and check login fields before hitting the backend.
pub fn validate_login_input(account: &str, password: &str) -> Result<(String, String), &'static str> {
    let account = account.trim();
    if account.is_empty() || password.is_empty() {
        return Err("Enter both account and password.");
    }
    if account.encode_utf16().count() > MAX_ACCOUNT_LEN {
        return Err("Account is too long.");
    }
    let len = password.encode_utf16().count();
    if !(MIN_PASSWORD_LEN..=MAX_PASSWORD_LEN).contains(&len) {
        return Err("Password must be 6-18 characters.");
    }
    Ok((account.to_owned(), password.to_owned()))
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let store = expect_context::<SessionStore>();
    let notifications = expect_context::<RwSignal<NotificationState>>();
    let navigation = expect_context::<RwSignal<NavigationState>>();
    let query = use_query_map();

    let account = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let (account_value, password_value) =
            match validate_login_input(&account.get_untracked(), &password.get_untracked()) {
                Ok(values) => values,
                Err(msg) => {
                    info.set(msg.to_owned());
                    return;
                }
            };
        let target = redirect_target(query.with_untracked(|q| q.get("redirect")).as_deref());
        busy.set(true);
        info.set(String::new());

        let store = store.clone();
        leptos::task::spawn_local(async move {
            match api::user_login(store.client(), &account_value, &password_value).await {
                Ok(envelope) => match envelope.into_success_data() {
                    Some(user) => {
                        store.set_login_user(user);
                        notifications.success("Logged in");
                        navigation.push(&target);
                    }
                    None => info.set("Login failed.".to_owned()),
                },
                Err(e) => info.set(e.display_message()),
            }
            busy.set(false);
        });
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"User Center"</h1>
                <p class="login-card__subtitle">"Log in"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        placeholder="Account"
                        autocomplete="username"
                        prop:value=move || account.get()
                        on:input=move |ev| account.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        autocomplete="current-password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Log in"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <p class="login-card__footer">
                    "No account? "
                    <a href=routes::USER_REGISTER>"Register"</a>
                </p>
            </div>
        </div>
    }
}
