//! Keeps `NavigationState` in sync with the router.
//!
//! SYSTEM CONTEXT
//! ==============
//! Must be mounted inside `<Router>`. The HTTP policy reads the current path
//! from `NavigationState` and queues redirects there; this component
//! performs them with `use_navigate`.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::state::navigation::NavigationState;

#[component]
pub fn NavigationBridge() -> impl IntoView {
    let navigation = expect_context::<RwSignal<NavigationState>>();
    let location = use_location();
    let navigate = use_navigate();

    Effect::new(move || {
        let path = location.pathname.get();
        navigation.update(|s| s.current_path = path);
    });

    Effect::new(move || {
        let pending = navigation.with(|s| s.pending_redirect.clone());
        if let Some(path) = pending {
            navigation.update_untracked(|s| {
                s.take_pending();
            });
            navigate(&path, NavigateOptions::default());
        }
    });
}
