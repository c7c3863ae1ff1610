//! Networking modules for the user-center REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `http` owns the client wrapper and transport, `classify` and `policy`
//! split response handling into a pure tagging step and a UI side-effect
//! step, `api` exposes typed endpoints, and `types` defines the wire schema.

pub mod api;
pub mod classify;
pub mod http;
pub mod policy;
pub mod types;
