//! Toast notifications surfaced by the HTTP policy and the route guard.
//!
//! DESIGN
//! ======
//! Plain state lives in [`NotificationState`]; the app provides it as an
//! `RwSignal`, which is also the concrete [`Notifier`] handed to the HTTP
//! client.

#[cfg(test)]
#[path = "notifications_test.rs"]
mod notifications_test;

use leptos::prelude::*;

use crate::net::policy::Notifier;

/// How long a toast stays visible.
pub const TOAST_TTL_MS: u32 = 3_000;
/// Older toasts are dropped beyond this many.
pub const MAX_TOASTS: usize = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Error,
}

impl ToastLevel {
    pub fn class(self) -> &'static str {
        match self {
            Self::Success => "toast toast--success",
            Self::Error => "toast toast--error",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub level: ToastLevel,
    pub message: String,
}

/// Visible toasts, oldest first.
#[derive(Clone, Debug, Default)]
pub struct NotificationState {
    pub toasts: Vec<Toast>,
    next_id: u64,
}

impl NotificationState {
    /// Queue a toast and return its id.
    pub fn push(&mut self, level: ToastLevel, message: &str) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.toasts.push(Toast { id, level, message: message.to_owned() });
        if self.toasts.len() > MAX_TOASTS {
            let overflow = self.toasts.len() - MAX_TOASTS;
            self.toasts.drain(..overflow);
        }
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|t| t.id != id);
    }
}

impl Notifier for RwSignal<NotificationState> {
    fn error(&self, message: &str) {
        let id = self.try_update(|s| s.push(ToastLevel::Error, message));
        schedule_dismiss(*self, id);
    }

    fn success(&self, message: &str) {
        let id = self.try_update(|s| s.push(ToastLevel::Success, message));
        schedule_dismiss(*self, id);
    }
}

fn schedule_dismiss(state: RwSignal<NotificationState>, id: Option<u64>) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(id) = id {
            leptos::task::spawn_local(async move {
                gloo_timers::future::TimeoutFuture::new(TOAST_TTL_MS).await;
                state.try_update(|s| s.dismiss(id));
            });
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (state, id);
    }
}
