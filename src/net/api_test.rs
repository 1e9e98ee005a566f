use super::*;

// =============================================================
// error_message extraction
// =============================================================

#[test]
fn error_message_prefers_message_field() {
    let body = r#"{"message":"out of stock","error":"ignored"}"#;
    assert_eq!(error_message(400, body), "out of stock");
}

#[test]
fn error_message_falls_back_to_error_field() {
    let body = r#"{"error":"invalid product data"}"#;
    assert_eq!(error_message(400, body), "invalid product data");
}

#[test]
fn error_message_generic_when_body_not_json() {
    assert_eq!(error_message(502, "<html>bad gateway</html>"), "request failed with status 502");
}

#[test]
fn error_message_generic_when_fields_missing() {
    assert_eq!(error_message(500, r#"{"detail":"nope"}"#), "request failed with status 500");
}

#[test]
fn error_message_ignores_non_string_fields() {
    assert_eq!(error_message(500, r#"{"message":42}"#), "request failed with status 500");
}

// =============================================================
// ApiError
// =============================================================

#[test]
fn bearer_header_format() {
    assert_eq!(bearer("abc.def.ghi"), "Bearer abc.def.ghi");
}

#[test]
fn service_unavailable_is_only_503() {
    assert!(ApiError::with_status(503, "down").is_service_unavailable());
    assert!(!ApiError::with_status(500, "boom").is_service_unavailable());
    let network = ApiError { status: None, message: "offline".to_owned() };
    assert!(!network.is_service_unavailable());
}

#[test]
fn api_error_displays_message() {
    let err = ApiError::with_status(403, "admins only");
    assert_eq!(err.to_string(), "admins only");
}

#[test]
fn endpoint_joins_base_and_path() {
    assert_eq!(endpoint("/product/7"), format!("{API_BASE}/product/7"));
}
