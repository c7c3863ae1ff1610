//! Landing page.

use leptos::prelude::*;

use crate::routes;
use crate::state::session::SessionStore;

#[component]
pub fn HomePage() -> impl IntoView {
    let store = expect_context::<SessionStore>();
    let session = Memo::new(move |_| store.session());

    view! {
        <section class="home">
            <h1>"Welcome"</h1>
            <p class="home__greeting">
                {move || session.with(|s| format!("Signed in as {}", s.display_name()))}
            </p>
            <Show
                when=move || session.with(|s| s.is_logged_in())
                fallback=|| {
                    view! {
                        <p>
                            <a href=routes::USER_LOGIN>"Log in"</a>
                            " or "
                            <a href=routes::USER_REGISTER>"create an account"</a>
                        </p>
                    }
                }
            >
                <p class="home__role">
                    {move || session.with(|s| s.user().map(|u| u.user_role.label()).unwrap_or_default())}
                </p>
            </Show>
        </section>
    }
}
