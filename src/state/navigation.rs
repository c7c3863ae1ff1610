//! Router access for code outside the component tree.
//!
//! SYSTEM CONTEXT
//! ==============
//! The HTTP policy needs the current path and a way to push the login page,
//! but `use_navigate` only exists inside `<Router>`. `NavigationBridge`
//! mirrors the location into [`NavigationState`] and performs queued
//! redirects.

#[cfg(test)]
#[path = "navigation_test.rs"]
mod navigation_test;

use leptos::prelude::*;

use crate::net::policy::Navigator;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavigationState {
    /// Path currently shown by the router.
    pub current_path: String,
    /// Redirect requested but not yet performed.
    pub pending_redirect: Option<String>,
}

impl Default for NavigationState {
    fn default() -> Self {
        Self { current_path: crate::routes::HOME.to_owned(), pending_redirect: None }
    }
}

impl NavigationState {
    /// Record a redirect unless the router is already there.
    pub fn request(&mut self, path: &str) {
        if self.current_path != path {
            self.pending_redirect = Some(path.to_owned());
        }
    }

    /// Take the pending redirect, if any.
    pub fn take_pending(&mut self) -> Option<String> {
        self.pending_redirect.take()
    }
}

impl Navigator for RwSignal<NavigationState> {
    fn current_path(&self) -> String {
        self.try_with_untracked(|s| s.current_path.clone()).unwrap_or_default()
    }

    fn push(&self, path: &str) {
        self.try_update(|s| s.request(path));
    }
}
