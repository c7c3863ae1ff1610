//! Global navigation guard.
//!
//! SYSTEM CONTEXT
//! ==============
//! Runs before every route transition (see `components::route_guard`).
//! The first transition waits for the session store's one-time user fetch;
//! after that, paths under `/admin` require the admin role.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use std::sync::Arc;

use crate::net::http::{BrowserTransport, Transport};
use crate::net::policy::Notifier;
use crate::routes;
use crate::state::session::{Session, SessionStore};

pub const PERMISSION_DENIED_MESSAGE: &str = "No permission to access this page";

/// What to do with a navigation attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Continue to the requested destination.
    Proceed,
    /// Abort and go to `to` instead, telling the user why.
    Redirect { to: String, notice: &'static str },
}

/// Decide a navigation to `full_path` (path plus query) for `session`.
pub fn decide(full_path: &str, session: &Session) -> GuardDecision {
    if routes::is_admin_path(full_path) && !session.is_admin() {
        return GuardDecision::Redirect { to: login_redirect(full_path), notice: PERMISSION_DENIED_MESSAGE };
    }
    GuardDecision::Proceed
}

/// Login URL that returns to `full_path` after a successful login.
pub fn login_redirect(full_path: &str) -> String {
    format!("{}?redirect={}", routes::USER_LOGIN, urlencoding::encode(full_path))
}

/// Where to go after login: the `redirect` parameter if it is a local path,
/// otherwise home.
pub fn redirect_target(raw: Option<&str>) -> String {
    match raw.map(str::trim) {
        Some(path) if path.starts_with('/') && !path.starts_with("//") && !path.contains('\\') => path.to_owned(),
        _ => routes::HOME.to_owned(),
    }
}

/// Session-aware guard shared by every route.
#[derive(Clone)]
pub struct NavigationGuard<T = BrowserTransport> {
    store: SessionStore<T>,
    notifier: Arc<dyn Notifier>,
}

impl<T: Transport> NavigationGuard<T> {
    pub fn new(store: SessionStore<T>, notifier: Arc<dyn Notifier>) -> Self {
        Self { store, notifier }
    }

    /// Evaluate one navigation attempt.
    ///
    /// Redirect decisions have already shown their notice when this returns.
    pub async fn before_each(&self, full_path: &str) -> GuardDecision {
        self.store.ensure_loaded().await;
        let session = self.store.session_untracked();
        let decision = decide(full_path, &session);
        if let GuardDecision::Redirect { to, notice } = &decision {
            leptos::logging::log!("guard: {full_path} -> {to} ({})", session.display_name());
            self.notifier.error(notice);
        }
        decision
    }
}
