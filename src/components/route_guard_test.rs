use super::*;
use crate::net::types::Role;
use crate::testing::response;

fn checking() -> AuthState {
    AuthState::default()
}

fn signed_out() -> AuthState {
    let mut state = AuthState::default();
    state.clear();
    state
}

fn signed_in(roles: &[Role]) -> AuthState {
    let mut state = AuthState::default();
    state.authenticate(response("1", roles, "T1"));
    state
}

// =============================================================
// Checking suspends every guard
// =============================================================

#[test]
fn checking_suspends_all_policies() {
    for policy in [GuardPolicy::AUTHENTICATED_ONLY, GuardPolicy::ANONYMOUS_ONLY, GuardPolicy::ADMIN_ONLY] {
        assert_eq!(policy.evaluate(&checking()), GuardDecision::Suspend);
    }
}

// =============================================================
// Authenticated-only
// =============================================================

#[test]
fn authenticated_only_redirects_signed_out_to_login() {
    assert_eq!(GuardPolicy::AUTHENTICATED_ONLY.evaluate(&signed_out()), GuardDecision::Redirect(LOGIN_ROUTE));
}

#[test]
fn authenticated_only_renders_signed_in() {
    assert_eq!(GuardPolicy::AUTHENTICATED_ONLY.evaluate(&signed_in(&[Role::User])), GuardDecision::Render);
}

// =============================================================
// Anonymous-only
// =============================================================

#[test]
fn anonymous_only_redirects_signed_in_home() {
    assert_eq!(GuardPolicy::ANONYMOUS_ONLY.evaluate(&signed_in(&[])), GuardDecision::Redirect(HOME_ROUTE));
}

#[test]
fn anonymous_only_renders_signed_out() {
    assert_eq!(GuardPolicy::ANONYMOUS_ONLY.evaluate(&signed_out()), GuardDecision::Render);
}

// =============================================================
// Admin-only
// =============================================================

#[test]
fn admin_only_redirects_signed_out_to_login() {
    assert_eq!(GuardPolicy::ADMIN_ONLY.evaluate(&signed_out()), GuardDecision::Redirect(LOGIN_ROUTE));
}

#[test]
fn admin_only_redirects_customer_home() {
    let mut state = AuthState::default();
    let mut data = response("1", &[], "T1");
    data.user = serde_json::from_value(serde_json::json!({"id": 1, "roles": ["customer"]})).expect("user");
    state.authenticate(data);
    assert_eq!(GuardPolicy::ADMIN_ONLY.evaluate(&state), GuardDecision::Redirect(HOME_ROUTE));
}

#[test]
fn admin_only_renders_admin() {
    assert_eq!(GuardPolicy::ADMIN_ONLY.evaluate(&signed_in(&[Role::User, Role::Admin])), GuardDecision::Render);
}

#[test]
fn custom_policy_uses_extra_fallback() {
    fn never(_: &AuthState) -> bool {
        false
    }
    let policy = GuardPolicy {
        required: AuthStatus::Authenticated,
        fallback: LOGIN_ROUTE,
        extra: Some(Requirement { check: never, fallback: "/denied" }),
    };
    assert_eq!(policy.evaluate(&signed_in(&[Role::Admin])), GuardDecision::Redirect("/denied"));
}
