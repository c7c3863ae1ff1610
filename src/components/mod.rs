//! Reusable UI components.
//!
//! ARCHITECTURE
//! ============
//! `route_guard` and `navigation_bridge` connect the router to the guard
//! and the HTTP policy; `toasts` and `nav_bar` are shared chrome.

pub mod nav_bar;
pub mod navigation_bridge;
pub mod route_guard;
pub mod toasts;
