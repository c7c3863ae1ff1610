//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! One page per entry in `routes::ROUTES`. Pages own form state and call
//! `net::api`; access control stays in the route guard.

pub mod home;
pub mod login;
pub mod register;
pub mod user_manage;
