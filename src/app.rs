//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos::reactive::owner::LocalStorage;
use leptos_meta::{Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::loading::FullScreenLoading;
use crate::components::route_guard::{GuardPolicy, RouteGuard};
use crate::config::ClientConfig;
use crate::net::api::HttpAuthApi;
use crate::pages::{account::AccountPage, admin::AdminPage, home::HomePage, login::LoginPage, register::RegisterPage};
use crate::state::auth::{AuthState, AuthStatus};
use crate::state::session::SessionStore;
use crate::util::storage::BrowserStorage;

/// Session store wired to the real backend and `localStorage`.
pub type AppSession = SessionStore<HttpAuthApi, BrowserStorage>;

/// Context handle for the session store. The store is `!Send`, so it lives
/// in local arena storage.
pub type SessionContext = StoredValue<AppSession, LocalStorage>;

/// Root application component.
///
/// Builds the session store, mirrors it into an `RwSignal<AuthState>` for
/// reactive readers, starts the initial status check, and sets up routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ClientConfig::from_env();
    let session = AppSession::new(HttpAuthApi::new(config.clone()), BrowserStorage, config.token_key);

    let auth = RwSignal::new(session.state());
    session.subscribe(move |state| auth.set(state.clone()));

    provide_context(auth);
    provide_context::<SessionContext>(StoredValue::new_local(session.clone()));

    // Resolve the initial `Checking` status from the persisted token.
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        let restored = session.check_auth_status().await;
        log::debug!("initial status check restored session: {restored}");
    });

    let resolved = move || auth.with(|s| s.status() != AuthStatus::Checking);

    view! {
        <Stylesheet id="leptos" href="/pkg/teslo-shop.css"/>
        <Title text="Teslo | Shop"/>

        <Show when=resolved fallback=|| view! { <FullScreenLoading/> }>
            <Router>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route
                        path=(StaticSegment("auth"), StaticSegment("login"))
                        view=|| view! { <RouteGuard policy=GuardPolicy::ANONYMOUS_ONLY><LoginPage/></RouteGuard> }
                    />
                    <Route
                        path=(StaticSegment("auth"), StaticSegment("register"))
                        view=|| view! { <RouteGuard policy=GuardPolicy::ANONYMOUS_ONLY><RegisterPage/></RouteGuard> }
                    />
                    <Route
                        path=StaticSegment("account")
                        view=|| view! { <RouteGuard policy=GuardPolicy::AUTHENTICATED_ONLY><AccountPage/></RouteGuard> }
                    />
                    <Route
                        path=StaticSegment("admin")
                        view=|| view! { <RouteGuard policy=GuardPolicy::ADMIN_ONLY><AdminPage/></RouteGuard> }
                    />
                </Routes>
            </Router>
        </Show>
    }
}
