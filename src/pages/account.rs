//! Signed-in user's account summary.

use leptos::prelude::*;

use crate::state::auth::AuthState;

#[component]
pub fn AccountPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    let email = move || auth.with(|s| s.user().map(|u| u.email.clone()).unwrap_or_default());
    let name = move || auth.with(|s| s.user().map(|u| u.full_name.clone()).unwrap_or_default());
    let roles = move || {
        auth.with(|s| {
            s.user()
                .map(|u| u.roles.iter().map(|r| format!("{r:?}")).collect::<Vec<_>>().join(", "))
                .unwrap_or_default()
        })
    };

    view! {
        <div class="account-page">
            <h1>"Account"</h1>
            <dl>
                <dt>"Name"</dt>
                <dd>{name}</dd>
                <dt>"Email"</dt>
                <dd>{email}</dd>
                <dt>"Roles"</dt>
                <dd>{roles}</dd>
            </dl>
        </div>
    }
}
