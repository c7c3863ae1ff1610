//! Stack of transient notifications. Click a toast to dismiss it early.

use leptos::prelude::*;

use crate::state::notifications::{NotificationState, Toast};

#[component]
pub fn Toasts() -> impl IntoView {
    let notifications = expect_context::<RwSignal<NotificationState>>();

    view! {
        <div class="toasts" aria-live="polite">
            <For
                each=move || notifications.get().toasts
                key=|toast| toast.id
                children=move |toast: Toast| {
                    let id = toast.id;
                    view! {
                        <div
                            class=toast.level.class()
                            role="alert"
                            on:click=move |_| notifications.update(|s| s.dismiss(id))
                        >
                            {toast.message}
                        </div>
                    }
                }
            />
        </div>
    }
}
