use super::*;

#[test]
fn from_status_extracts_msg_field() {
    let err = ApiError::from_status(400, r#"{"msg":"用户名已存在"}"#);
    assert_eq!(err, ApiError::Status { status: 400, message: Some("用户名已存在".to_owned()) });
    assert_eq!(err.user_message(), Some("用户名已存在"));
}

#[test]
fn from_status_accepts_detail_field() {
    let err = ApiError::from_status(401, r#"{"detail":"Unauthorized"}"#);
    assert_eq!(err.user_message(), Some("Unauthorized"));
}

#[test]
fn from_status_ignores_non_json_body() {
    let err = ApiError::from_status(502, "<html>bad gateway</html>");
    assert_eq!(err.user_message(), None);
    assert_eq!(err.to_string(), "request failed: 502");
}

#[test]
fn network_error_has_no_user_message() {
    assert_eq!(ApiError::Network("offline".to_owned()).user_message(), None);
}
