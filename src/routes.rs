//! Route table.
//!
//! Paths are declared once here; `app` mounts one `<Route>` per entry and
//! the guard and HTTP policy refer to the constants instead of literals.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

pub const HOME: &str = "/";
pub const ADMIN_USER_MANAGE: &str = "/admin/userManage";
pub const USER_LOGIN: &str = "/user/login";
pub const USER_REGISTER: &str = "/user/register";

/// Every path under this prefix requires the admin role.
pub const ADMIN_PREFIX: &str = "/admin";

/// The page a route renders.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteView {
    Home,
    UserManage,
    UserLogin,
    UserRegister,
}

/// One registered route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteEntry {
    pub path: &'static str,
    pub name: &'static str,
    pub view: RouteView,
}

pub static ROUTES: [RouteEntry; 4] = [
    RouteEntry { path: HOME, name: "home", view: RouteView::Home },
    RouteEntry { path: ADMIN_USER_MANAGE, name: "userManage", view: RouteView::UserManage },
    RouteEntry { path: USER_LOGIN, name: "userLogin", view: RouteView::UserLogin },
    RouteEntry { path: USER_REGISTER, name: "userRegister", view: RouteView::UserRegister },
];

/// Resolve a path (query and fragment ignored) to its route, if registered.
pub fn resolve(path: &str) -> Option<&'static RouteEntry> {
    let path = strip_query(path);
    let path = if path.len() > 1 { path.trim_end_matches('/') } else { path };
    ROUTES.iter().find(|route| route.path == path)
}

/// Look a route up by name.
pub fn by_name(name: &str) -> Option<&'static RouteEntry> {
    ROUTES.iter().find(|route| route.name == name)
}

/// Path portion of a full path.
pub fn strip_query(full_path: &str) -> &str {
    let end = full_path.find(['?', '#']).unwrap_or(full_path.len());
    &full_path[..end]
}

/// Whether `full_path` falls under the admin prefix.
pub fn is_admin_path(full_path: &str) -> bool {
    full_path.starts_with(ADMIN_PREFIX)
}

/// Join a router pathname and search string into a full path.
///
/// `search` may be given with or without its leading `?`.
pub fn full_path(pathname: &str, search: &str) -> String {
    let search = search.trim_start_matches('?');
    if search.is_empty() { pathname.to_owned() } else { format!("{pathname}?{search}") }
}
