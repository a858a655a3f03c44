//! Account registration page.

use leptos::prelude::*;

use crate::app::SessionContext;
use crate::config::LOGIN_ROUTE;

#[cfg(feature = "csr")]
const REGISTER_FAILED: &str = "Could not create the account";

#[component]
pub fn RegisterPage() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let full_name = RwSignal::new(String::new());
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
            let (name, email, password) = (full_name.get_untracked(), email.get_untracked(), password.get_untracked());
            leptos::task::spawn_local(async move {
                if !store.register(&email, &password, &name).await {
                    error.set(Some(REGISTER_FAILED));
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
            <h1>"Create account"</h1>
            <form class="auth-page__form" on:submit=on_submit>
                <label class="auth-page__label">
                    "Full name"
                    <input
                        type="text"
                        prop:value=move || full_name.get()
                        on:input=move |ev| full_name.set(event_target_value(&ev))
                    />
                </label>
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
                    "Create account"
                </button>
            </form>
            <a href=LOGIN_ROUTE>"Already have an account? Login"</a>
        </div>
    }
}
