//! Storefront landing page with session-aware navigation.

use leptos::prelude::*;

use crate::app::SessionContext;
use crate::config::{ACCOUNT_ROUTE, ADMIN_ROUTE, LOGIN_ROUTE, REGISTER_ROUTE};
use crate::state::auth::AuthState;

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let session = expect_context::<SessionContext>();

    let signed_in = move || auth.with(AuthState::is_authenticated);
    let is_admin = move || auth.with(AuthState::is_admin);
    let greeting = move || {
        auth.with(|s| s.user().map(|u| format!("Hello, {}", u.full_name)))
            .unwrap_or_else(|| "Welcome".to_owned())
    };

    view! {
        <div class="home-page">
            <header class="home-page__header">
                <h1>"Teslo | Shop"</h1>
                <nav class="home-page__nav">
                    <Show
                        when=signed_in
                        fallback=|| view! {
                            <a href=LOGIN_ROUTE class="btn">"Login"</a>
                            <a href=REGISTER_ROUTE class="btn">"Create account"</a>
                        }
                    >
                        <Show when=is_admin>
                            <a href=ADMIN_ROUTE class="btn">"Admin"</a>
                        </Show>
                        <a href=ACCOUNT_ROUTE class="btn">"Account"</a>
                        <button class="btn" on:click=move |_| session.with_value(|s| s.logout())>
                            "Logout"
                        </button>
                    </Show>
                </nav>
            </header>
            <p class="home-page__greeting">{greeting}</p>
        </div>
    }
}
