//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! Each module owns one concern (`session`, `notifications`, `navigation`)
//! and is provided through Leptos context by `App`.

pub mod navigation;
pub mod notifications;
pub mod session;
