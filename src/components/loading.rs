//! Full-screen spinner shown while the session is still resolving.

use leptos::prelude::*;

#[component]
pub fn FullScreenLoading() -> impl IntoView {
    view! {
        <div class="full-screen-loading">
            <div class="full-screen-loading__spinner"></div>
            <p class="full-screen-loading__label">"Please wait..."</p>
        </div>
    }
}
