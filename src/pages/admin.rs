//! Admin dashboard entry. Only reachable through the admin guard.

use leptos::prelude::*;

use crate::config::HOME_ROUTE;
use crate::state::auth::AuthState;

#[component]
pub fn AdminPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let name = move || auth.with(|s| s.user().map(|u| u.full_name.clone()).unwrap_or_default());

    view! {
        <div class="admin-page">
            <h1>"Dashboard"</h1>
            <p>"Signed in as " {name}</p>
            <a href=HOME_ROUTE class="btn">"Back to shop"</a>
        </div>
    }
}
