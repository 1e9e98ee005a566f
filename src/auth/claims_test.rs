use base64::Engine;
use base64::engine::general_purpose::{URL_SAFE, URL_SAFE_NO_PAD};

use super::*;

/// Build an unsigned JWT-shaped token around the given payload JSON.
fn token_with_payload(payload: &str) -> String {
    let header = URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256","typ":"JWT"}"#);
    format!("{header}.{}.sig", URL_SAFE_NO_PAD.encode(payload))
}

fn admin_token(exp: f64) -> String {
    token_with_payload(&format!(
        r#"{{"email":"admin@shop.example","role":"ADMIN","exp":{exp}}}"#
    ))
}

// =============================================================
// decode
// =============================================================

#[test]
fn decodes_email_role_and_exp() {
    let claims = Claims::decode(&admin_token(4_102_444_800.0)).expect("claims");
    assert_eq!(claims.email, "admin@shop.example");
    assert_eq!(claims.role, Role::Admin);
    assert_eq!(claims.exp, 4_102_444_800.0);
}

#[test]
fn ignores_extra_claims() {
    let token = token_with_payload(
        r#"{"email":"u@shop.example","role":"USER","exp":99,"sub":"42","iss":"shop"}"#,
    );
    let claims = Claims::decode(&token).expect("claims");
    assert_eq!(claims.role, Role::User);
}

#[test]
fn accepts_padded_payload_segments() {
    let header = URL_SAFE_NO_PAD.encode(r#"{"alg":"none"}"#);
    let payload = URL_SAFE.encode(r#"{"email":"u@shop.example","role":"USER","exp":1}"#);
    let token = format!("{header}.{payload}.sig");
    assert!(Claims::decode(&token).is_ok());
}

#[test]
fn rejects_tokens_without_three_segments() {
    assert!(matches!(Claims::decode("abc"), Err(ClaimsError::Structure)));
    assert!(matches!(Claims::decode("a.b"), Err(ClaimsError::Structure)));
    assert!(matches!(Claims::decode("a.b.c.d"), Err(ClaimsError::Structure)));
    assert!(matches!(Claims::decode(""), Err(ClaimsError::Structure)));
}

#[test]
fn rejects_non_base64_payload() {
    assert!(matches!(
        Claims::decode("head.n!o@t$b64.sig"),
        Err(ClaimsError::Encoding(_))
    ));
}

#[test]
fn rejects_payload_missing_required_claims() {
    let token = token_with_payload(r#"{"email":"u@shop.example"}"#);
    assert!(matches!(Claims::decode(&token), Err(ClaimsError::Payload(_))));
}

#[test]
fn rejects_unknown_role() {
    let token = token_with_payload(r#"{"email":"u@shop.example","role":"ROOT","exp":1}"#);
    assert!(matches!(Claims::decode(&token), Err(ClaimsError::Payload(_))));
}

// =============================================================
// is_expired
// =============================================================

#[test]
fn expiry_in_the_future_is_valid() {
    let claims = Claims::decode(&admin_token(1000.0)).expect("claims");
    assert!(!claims.is_expired(999_999.0));
}

#[test]
fn expiry_in_the_past_is_expired() {
    let claims = Claims::decode(&admin_token(1000.0)).expect("claims");
    assert!(claims.is_expired(1_000_001.0));
}

#[test]
fn expiry_boundary_counts_as_expired() {
    let claims = Claims::decode(&admin_token(1000.0)).expect("claims");
    assert!(claims.is_expired(1_000_000.0));
}
