//! Route guard: render protected content or redirect based on session state.
//!
//! A single [`GuardPolicy`] describes which status a route requires, where
//! to send visitors who lack it, and an optional extra requirement with its
//! own fallback. The policy is a pure function of [`AuthState`]; the
//! [`RouteGuard`] component just re-evaluates it whenever the state changes.

#[cfg(test)]
#[path = "route_guard_test.rs"]
mod route_guard_test;

use leptos::prelude::*;
use leptos_router::components::Redirect;

use crate::config::{HOME_ROUTE, LOGIN_ROUTE};
use crate::state::auth::{AuthState, AuthStatus};

/// Outcome of evaluating a guard.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Session still resolving; render nothing.
    Suspend,
    Redirect(&'static str),
    Render,
}

/// Additional check applied once the required status is met.
#[derive(Clone, Copy, Debug)]
pub struct Requirement {
    pub check: fn(&AuthState) -> bool,
    pub fallback: &'static str,
}

#[derive(Clone, Copy, Debug)]
pub struct GuardPolicy {
    pub required: AuthStatus,
    pub fallback: &'static str,
    pub extra: Option<Requirement>,
}

impl GuardPolicy {
    /// Signed-in users only; others go to login.
    pub const AUTHENTICATED_ONLY: Self = Self { required: AuthStatus::Authenticated, fallback: LOGIN_ROUTE, extra: None };

    /// Signed-out visitors only (login/register pages); others go home.
    pub const ANONYMOUS_ONLY: Self = Self { required: AuthStatus::NotAuthenticated, fallback: HOME_ROUTE, extra: None };

    /// Admins only; signed-out visitors go to login, other users go home.
    pub const ADMIN_ONLY: Self = Self {
        required: AuthStatus::Authenticated,
        fallback: LOGIN_ROUTE,
        extra: Some(Requirement { check: AuthState::is_admin, fallback: HOME_ROUTE }),
    };

    #[must_use]
    pub fn evaluate(&self, state: &AuthState) -> GuardDecision {
        let status = state.status();
        if status == AuthStatus::Checking {
            return GuardDecision::Suspend;
        }
        if status != self.required {
            return GuardDecision::Redirect(self.fallback);
        }
        match self.extra {
            Some(extra) if !(extra.check)(state) => GuardDecision::Redirect(extra.fallback),
            _ => GuardDecision::Render,
        }
    }
}

/// Wraps route content with a [`GuardPolicy`].
///
/// Reads the `RwSignal<AuthState>` context provided by the app root.
#[component]
pub fn RouteGuard(policy: GuardPolicy, children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    move || match auth.with(|state| policy.evaluate(state)) {
        GuardDecision::Suspend => ().into_any(),
        GuardDecision::Redirect(path) => view! { <Redirect path=path/> }.into_any(),
        GuardDecision::Render => children().into_any(),
    }
}
