//! Applies [`NavigationGuard`] decisions to the router.
//!
//! The routed view is withheld until the guard clears the current location;
//! redirect decisions replace the history entry so "back" does not bounce
//! into the guard again.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::guard::{GuardDecision, NavigationGuard};
use crate::routes;
use crate::state::navigation::NavigationState;

#[component]
pub fn RouteGuard(children: ChildrenFn) -> impl IntoView {
    let guard = expect_context::<NavigationGuard>();
    let navigation = expect_context::<RwSignal<NavigationState>>();
    let location = use_location();
    let navigate = use_navigate();

    let current = Memo::new(move |_| routes::full_path(&location.pathname.get(), &location.search.get()));
    let cleared = RwSignal::new(None::<String>);

    Effect::new(move || {
        let target = current.get();
        if routes::resolve(&target).is_none() {
            leptos::logging::log!("no route registered for {target}");
        }
        let guard = guard.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match guard.before_each(&target).await {
                GuardDecision::Proceed => cleared.set(Some(target)),
                GuardDecision::Redirect { to, .. } => {
                    // A newer navigation already superseded this one.
                    if current.get_untracked() == target {
                        // Supersedes the bare login redirect queued by the session check.
                        navigation.update_untracked(|s| {
                            s.take_pending();
                        });
                        navigate(&to, NavigateOptions { replace: true, ..NavigateOptions::default() });
                    }
                }
            }
        });
    });

    view! {
        <Show
            when=move || cleared.get().is_some_and(|path| path == current.get())
            fallback=|| view! { <p class="route-guard__pending">"Loading..."</p> }
        >
            {children()}
        </Show>
    }
}
