//! Session store for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided via context by `App`. The navigation guard awaits
//! [`SessionStore::ensure_loaded`] before its role check; pages read the
//! session reactively and update it after login/logout.
//!
//! DESIGN
//! ======
//! The first user fetch is single-flight: navigations that start while it is
//! in progress await the same fetch instead of issuing their own.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use leptos::prelude::*;
use tokio::sync::OnceCell;

use crate::net::api;
use crate::net::http::{BrowserTransport, HttpClient, Transport};
use crate::net::types::{LoginUser, NOT_LOGGED_IN};

/// Who is using the app right now.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Session {
    /// No user, or the user could not be fetched.
    #[default]
    Anonymous,
    LoggedIn(LoginUser),
}

impl Session {
    pub fn user(&self) -> Option<&LoginUser> {
        match self {
            Self::Anonymous => None,
            Self::LoggedIn(user) => Some(user),
        }
    }

    pub fn is_logged_in(&self) -> bool {
        matches!(self, Self::LoggedIn(_))
    }

    pub fn is_admin(&self) -> bool {
        self.user().is_some_and(LoginUser::is_admin)
    }

    pub fn display_name(&self) -> &str {
        self.user().map_or(NOT_LOGGED_IN, LoginUser::display_name)
    }
}

/// Progress of the one-time user fetch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InitPhase {
    FirstLoad,
    Loading,
    SteadyState,
}

/// Owns the [`Session`] and the HTTP client used to refresh it.
#[derive(Clone)]
pub struct SessionStore<T = BrowserTransport> {
    session: ArcRwSignal<Session>,
    init: Arc<OnceCell<()>>,
    loading: Arc<AtomicBool>,
    client: HttpClient<T>,
}

impl<T: Transport> SessionStore<T> {
    pub fn new(client: HttpClient<T>) -> Self {
        Self {
            session: ArcRwSignal::new(Session::Anonymous),
            init: Arc::new(OnceCell::new()),
            loading: Arc::new(AtomicBool::new(false)),
            client,
        }
    }

    pub fn client(&self) -> &HttpClient<T> {
        &self.client
    }

    /// Current session; tracked when read inside a reactive scope.
    pub fn session(&self) -> Session {
        self.session.get()
    }

    pub fn session_untracked(&self) -> Session {
        self.session.get_untracked()
    }

    /// The logged-in user, if any (tracked).
    pub fn login_user(&self) -> Option<LoginUser> {
        self.session.with(|s| s.user().cloned())
    }

    /// Overwrite the session with `user`.
    pub fn set_login_user(&self, user: LoginUser) {
        self.session.set(Session::LoggedIn(user));
    }

    /// Forget the current user.
    pub fn clear(&self) {
        self.session.set(Session::Anonymous);
    }

    /// Refresh the session from `GET /user/get/login`.
    ///
    /// Never fails: any rejection leaves the session anonymous.
    pub async fn fetch_login_user(&self) {
        let next = match api::get_login_user(&self.client).await {
            Ok(envelope) => match envelope.into_success_data() {
                Some(user) => Session::LoggedIn(user),
                None => Session::Anonymous,
            },
            Err(e) => {
                leptos::logging::log!("current user unavailable: {e}");
                Session::Anonymous
            }
        };
        self.session.set(next);
    }

    /// Run the first [`fetch_login_user`](Self::fetch_login_user) exactly
    /// once. Concurrent callers share the in-flight fetch; later callers
    /// return immediately.
    pub async fn ensure_loaded(&self) {
        self.init
            .get_or_init(|| async {
                self.loading.store(true, Ordering::Relaxed);
                self.fetch_login_user().await;
                self.loading.store(false, Ordering::Relaxed);
            })
            .await;
    }

    pub fn phase(&self) -> InitPhase {
        if self.init.initialized() {
            InitPhase::SteadyState
        } else if self.loading.load(Ordering::Relaxed) {
            InitPhase::Loading
        } else {
            InitPhase::FirstLoad
        }
    }
}
