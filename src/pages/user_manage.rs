//! Admin user management: search, paging, delete.
//!
//! SYSTEM CONTEXT
//! ==============
//! Only reachable once the route guard has confirmed the admin role. The
//! backend enforces the role again; a rejection here surfaces through the
//! HTTP policy like any other call.

#[cfg(test)]
#[path = "user_manage_test.rs"]
mod user_manage_test;

use leptos::prelude::*;

use crate::net::api;
use crate::net::policy::Notifier;
use crate::net::types::{UserQuery, UserVo};
use crate::state::notifications::NotificationState;
use crate::state::session::SessionStore;

/// Number of pages needed for `total` rows.
pub fn total_pages(total: i64, page_size: i64) -> i64 {
    if total <= 0 || page_size <= 0 {
        return 1;
    }
    total / page_size + i64::from(total % page_size != 0)
}

/// Query for a new name search, starting again from page one.
pub fn search_query(base: &UserQuery, name: &str) -> UserQuery {
    let name = name.trim();
    UserQuery {
        current: 1,
        user_name: (!name.is_empty()).then(|| name.to_owned()),
        ..base.clone()
    }
}

/// Query moved to `page`, clamped to the valid range.
pub fn page_query(base: &UserQuery, page: i64, total: i64) -> UserQuery {
    let last = total_pages(total, base.page_size);
    UserQuery { current: page.clamp(1, last), ..base.clone() }
}

fn confirm_delete(user: &UserVo) -> bool {
    #[cfg(feature = "hydrate")]
    {
        let label = user.user_account.as_deref().unwrap_or("this user");
        web_sys::window()
            .and_then(|w| w.confirm_with_message(&format!("Delete {label}?")).ok())
            .unwrap_or(false)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = user;
        false
    }
}

#[component]
pub fn UserManagePage() -> impl IntoView {
    let store = expect_context::<SessionStore>();
    let notifications = expect_context::<RwSignal<NotificationState>>();

    let query = RwSignal::new(UserQuery::default());
    let search = RwSignal::new(String::new());
    let users = RwSignal::new(Vec::<UserVo>::new());
    let total = RwSignal::new(0_i64);
    let loading = RwSignal::new(false);
    let refresh = RwSignal::new(0_u64);

    let load_store = store.clone();
    Effect::new(move || {
        refresh.track();
        let q = query.get();
        let store = load_store.clone();
        loading.set(true);
        leptos::task::spawn_local(async move {
            match api::list_users(store.client(), &q).await {
                Ok(envelope) => {
                    if let Some(page) = envelope.into_success_data() {
                        total.set(page.total);
                        users.set(page.records);
                    }
                }
                Err(e) => {
                    leptos::logging::warn!("user list failed: {e}");
                    users.set(Vec::new());
                }
            }
            loading.set(false);
        });
    });

    let on_search = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        query.set(search_query(&query.get_untracked(), &search.get_untracked()));
    };

    let delete = move |user: UserVo| {
        if !confirm_delete(&user) {
            return;
        }
        let store = store.clone();
        leptos::task::spawn_local(async move {
            if api::delete_user(store.client(), user.id).await.is_ok() {
                notifications.success("User deleted");
                refresh.update(|n| *n += 1);
            }
        });
    };

    let go_to = move |page: i64| {
        query.set(page_query(&query.get_untracked(), page, total.get_untracked()));
    };

    view! {
        <section class="user-manage">
            <h1>"User Management"</h1>
            <form class="user-manage__search" on:submit=on_search>
                <input
                    class="login-input"
                    type="search"
                    placeholder="Search by name"
                    prop:value=move || search.get()
                    on:input=move |ev| search.set(event_target_value(&ev))
                />
                <button class="login-button" type="submit">"Search"</button>
            </form>
            <Show when=move || loading.get()>
                <p class="user-manage__loading">"Loading..."</p>
            </Show>
            <table class="user-manage__table">
                <thead>
                    <tr>
                        <th>"ID"</th>
                        <th>"Account"</th>
                        <th>"Name"</th>
                        <th>"Role"</th>
                        <th>"Created"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || users.get()
                        key=|user| user.id
                        children=move |user: UserVo| {
                            let delete = delete.clone();
                            let row = user.clone();
                            view! {
                                <tr>
                                    <td>{user.id}</td>
                                    <td>{user.user_account.clone().unwrap_or_default()}</td>
                                    <td>{user.user_name.clone().unwrap_or_default()}</td>
                                    <td>{user.user_role.label()}</td>
                                    <td>{user.create_time.clone().unwrap_or_default()}</td>
                                    <td>
                                        <button class="user-manage__delete" on:click=move |_| delete(row.clone())>
                                            "Delete"
                                        </button>
                                    </td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
            <div class="user-manage__pager">
                <button
                    disabled=move || query.with(|q| q.current <= 1)
                    on:click=move |_| go_to(query.get_untracked().current - 1)
                >
                    "Prev"
                </button>
                <span>
                    {move || {
                        let q = query.get();
                        format!("Page {} of {} ({} users)", q.current, total_pages(total.get(), q.page_size), total.get())
                    }}
                </span>
                <button
                    disabled=move || query.with(|q| q.current >= total_pages(total.get(), q.page_size))
                    on:click=move |_| go_to(query.get_untracked().current + 1)
                >
                    "Next"
                </button>
            </div>
        </section>
    }
}
