//! Registration page.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;

use crate::net::api;
use crate::net::policy::{Navigator, Notifier};
use crate::pages::login::MIN_PASSWORD_LEN;
use crate::routes;
use crate::state::navigation::NavigationState;
use crate::state::notifications::NotificationState;
use crate::state::session::SessionStore;

/// Trim and check registration fields.
pub fn validate_register_input(
    account: &str,
    password: &str,
    check_password: &str,
) -> Result<(String, String, String), &'static str> {
    let account = account.trim();
    if account.is_empty() || password.is_empty() || check_password.is_empty() {
        return Err("All fields are required.");
    }
    // Lengths in UTF-16 units, as the backend counts them.
    let too_short = |s: &str| s.encode_utf16().count() < MIN_PASSWORD_LEN;
    if too_short(password) || too_short(check_password) {
        return Err("Password must be at least 6 characters.");
    }
    if password != check_password {
        return Err("Passwords do not match.");
    }
    Ok((account.to_owned(), password.to_owned(), check_password.to_owned()))
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let store = expect_context::<SessionStore>();
    let notifications = expect_context::<RwSignal<NotificationState>>();
    let navigation = expect_context::<RwSignal<NavigationState>>();

    let account = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let check_password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let (account_value, password_value, check_value) = match validate_register_input(
            &account.get_untracked(),
            &password.get_untracked(),
            &check_password.get_untracked(),
        ) {
            Ok(values) => values,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set(String::new());

        let store = store.clone();
        leptos::task::spawn_local(async move {
            match api::user_register(store.client(), &account_value, &password_value, &check_value).await {
                Ok(_) => {
                    notifications.success("Registered. Please log in.");
                    navigation.push(routes::USER_LOGIN);
                }
                Err(e) => info.set(e.display_message()),
            }
            busy.set(false);
        });
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"User Center"</h1>
                <p class="login-card__subtitle">"Create an account"</p>
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
                        autocomplete="new-password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Confirm password"
                        autocomplete="new-password"
                        prop:value=move || check_password.get()
                        on:input=move |ev| check_password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Register"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <p class="login-card__footer">
                    "Already registered? "
                    <a href=routes::USER_LOGIN>"Log in"</a>
                </p>
            </div>
        </div>
    }
}
