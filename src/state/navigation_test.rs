use super::*;

#[test]
fn navigation_state_defaults_to_home_without_redirect() {
    let state = NavigationState::default();
    assert_eq!(state.current_path, "/");
    assert!(state.pending_redirect.is_none());
}

#[test]
fn request_queues_redirect_and_take_clears_it() {
    let mut state = NavigationState::default();
    state.request("/user/login");
    assert_eq!(state.take_pending().as_deref(), Some("/user/login"));
    assert!(state.take_pending().is_none());
}

#[test]
fn request_to_current_path_is_ignored() {
    let mut state = NavigationState { current_path: "/user/login".to_owned(), pending_redirect: None };
    state.request("/user/login");
    assert!(state.pending_redirect.is_none());
}
