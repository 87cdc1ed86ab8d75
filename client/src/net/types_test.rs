use super::*;

fn form(password: &str, confirm: &str) -> RegisterForm {
    RegisterForm {
        username: "a".to_owned(),
        password: password.to_owned(),
        confirm_password: confirm.to_owned(),
    }
}

// =============================================================
// RegisterForm
// =============================================================

#[test]
fn register_form_detects_mismatch() {
    assert!(!form("1", "2").passwords_match());
    assert!(form("secret", "secret").passwords_match());
}

#[test]
fn register_request_omits_confirmation() {
    let json = serde_json::to_value(form("secret", "secret").to_request()).unwrap();
    assert_eq!(json, serde_json::json!({ "username": "a", "password": "secret" }));
}

// =============================================================
// LoginResponse
// =============================================================

#[test]
fn login_response_with_user_becomes_session() {
    let body = r#"{"token":"t-1","user":{"id":7,"username":"alice","nickname":"Al","avatar":"avatars/a.png"}}"#;
    let resp: LoginResponse = serde_json::from_str(body).unwrap();
    let session = resp.into_session("alice").unwrap();
    assert_eq!(session.token, "t-1");
    assert_eq!(session.user.id, 7);
    assert_eq!(session.user.avatar.as_deref(), Some("avatars/a.png"));
}

#[test]
fn login_response_without_user_falls_back_to_username() {
    let resp: LoginResponse = serde_json::from_str(r#"{"token":"t-2"}"#).unwrap();
    let session = resp.into_session("bob").unwrap();
    assert_eq!(session.user.username, "bob");
    assert_eq!(session.user.avatar, None);
}

#[test]
fn login_response_without_token_is_rejected() {
    let resp: LoginResponse = serde_json::from_str(r#"{"msg":"用户名或密码错误"}"#).unwrap();
    assert_eq!(resp.message.as_deref(), Some("用户名或密码错误"));
    assert!(resp.into_session("bob").is_none());
}

#[test]
fn login_response_empty_token_is_rejected() {
    let resp: LoginResponse = serde_json::from_str(r#"{"token":""}"#).unwrap();
    assert!(resp.into_session("bob").is_none());
}

// =============================================================
// User / Course
// =============================================================

#[test]
fn display_name_prefers_nickname() {
    let mut user = User { id: 1, username: "alice".to_owned(), nickname: Some("Al".to_owned()), avatar: None };
    assert_eq!(user.display_name(), "Al");
    user.nickname = Some("  ".to_owned());
    assert_eq!(user.display_name(), "alice");
}

#[test]
fn course_payload_accepts_bare_list_and_wrapped_items() {
    let bare: CoursePayload = serde_json::from_str(r#"[{"id":1,"title":"电路基础"}]"#).unwrap();
    assert_eq!(bare.into_items().len(), 1);

    let wrapped: CoursePayload =
        serde_json::from_str(r#"{"items":[{"id":2,"name":"继电保护","cover":"c.png"}]}"#).unwrap();
    let items = wrapped.into_items();
    assert_eq!(items[0].title, "继电保护");
    assert_eq!(items[0].cover.as_deref(), Some("c.png"));
}
