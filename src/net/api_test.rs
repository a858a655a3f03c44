use super::*;

// =============================================================
// rejection
// =============================================================

#[test]
fn rejection_prefers_message_string() {
    let err = rejection(401, r#"{"message":"Credentials are not valid (email)","error":"Unauthorized","statusCode":401}"#);
    assert_eq!(
        err,
        AuthError::BackendRejected { status: 401, message: "Credentials are not valid (email)".to_owned() }
    );
}

#[test]
fn rejection_takes_first_validation_message() {
    let err = rejection(400, r#"{"message":["email must be an email","password too short"],"error":"Bad Request"}"#);
    assert_eq!(err, AuthError::BackendRejected { status: 400, message: "email must be an email".to_owned() });
}

#[test]
fn rejection_falls_back_to_error_field() {
    let err = rejection(401, r#"{"message":"","error":"Unauthorized"}"#);
    assert_eq!(err, AuthError::BackendRejected { status: 401, message: "Unauthorized".to_owned() });
}

#[test]
fn rejection_non_json_body_uses_status() {
    let err = rejection(502, "<html>Bad Gateway</html>");
    assert_eq!(err, AuthError::BackendRejected { status: 502, message: "request failed with status 502".to_owned() });
}

#[test]
fn bearer_formats_header_value() {
    assert_eq!(bearer("T1"), "Bearer T1");
}

// =============================================================
// HttpAuthApi without a browser
// =============================================================

#[cfg(not(feature = "csr"))]
#[test]
fn http_api_fails_fast_outside_browser() {
    let api = HttpAuthApi::new(ClientConfig::default());
    let result = futures::executor::block_on(api.check_status("T1"));
    assert!(matches!(result, Err(AuthError::NetworkFailure(_))));
}
