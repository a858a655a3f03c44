//! Login page with email/password form.

use leptos::prelude::*;

use crate::app::SessionContext;
use crate::config::REGISTER_ROUTE;

#[cfg(feature = "csr")]
const LOGIN_FAILED: &str = "Invalid email and/or password";

/// Login page. On success the surrounding anonymous-only guard sends the
/// user home once the session turns authenticated.
#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<&'static str>);
    let pending = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        error.set(None);

        #[cfg(feature = "csr")]
        {
            pending.set(true);
            let store = session.get_value();
            let (email, password) = (email.get_untracked(), password.get_untracked());
            leptos::task::spawn_local(async move {
                if !store.login(&email, &password).await {
                    error.set(Some(LOGIN_FAILED));
                }
                pending.set(false);
            });
        }

        #[cfg(not(feature = "csr"))]
        {
            let _ = session;
        }
    };

    view! {
        <div class="auth-page">
            <h1>"Login"</h1>
            <form class="auth-page__form" on:submit=on_submit>
                <label class="auth-page__label">
                    "Email"
                    <input
                        type="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </label>
                <label class="auth-page__label">
                    "Password"
                    <input
                        type="password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </label>
                <Show when=move || error.get().is_some()>
                    <p class="auth-page__error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <button class="btn btn--primary" type="submit" disabled=move || pending.get()>
                    "Login"
                </button>
            </form>
            <a href=REGISTER_ROUTE>"Create a new account"</a>
        </div>
    }
}
