use super::*;

fn config() -> ApiConfig {
    ApiConfig::default()
}

#[test]
fn avatar_missing_or_blank_uses_default() {
    assert_eq!(resolve_avatar_url(&config(), None), DEFAULT_AVATAR_URL);
    assert_eq!(resolve_avatar_url(&config(), Some("   ")), DEFAULT_AVATAR_URL);
}

#[test]
fn avatar_absolute_urls_pass_through() {
    for url in ["https://cdn.example.com/a.png", "http://x/y.jpg", "//cdn/z.png", "data:image/png;base64,AA"] {
        assert_eq!(resolve_avatar_url(&config(), Some(url)), url);
    }
}

#[test]
fn avatar_relative_ref_joins_media_base_with_single_slash() {
    assert_eq!(resolve_avatar_url(&config(), Some("avatars/a.png")), "/media/avatars/a.png");
    assert_eq!(resolve_avatar_url(&config(), Some("/avatars/a.png")), "/media/avatars/a.png");
}

#[test]
fn avatar_ref_already_under_media_is_not_doubled() {
    assert_eq!(resolve_avatar_url(&config(), Some("/media/avatars/a.png")), "/media/avatars/a.png");
    assert_eq!(resolve_avatar_url(&config(), Some("media/avatars/a.png")), "/media/avatars/a.png");
}

#[test]
fn avatar_absolute_media_base() {
    let config = ApiConfig::new("/api", "http://localhost:8000/media/");
    assert_eq!(
        resolve_avatar_url(&config, Some("avatars/a.png")),
        "http://localhost:8000/media/avatars/a.png"
    );
}

#[test]
fn avatar_ref_with_media_like_prefix_is_still_joined() {
    assert_eq!(resolve_avatar_url(&config(), Some("mediafiles/a.png")), "/media/mediafiles/a.png");
}

#[test]
fn avatar_media_ref_with_absolute_base_is_not_doubled() {
    let config = ApiConfig::new("/api", "http://localhost:8000/media");
    assert_eq!(
        resolve_avatar_url(&config, Some("/media/avatars/a.png")),
        "http://localhost:8000/media/avatars/a.png"
    );
    assert_eq!(
        resolve_avatar_url(&config, Some("avatars/a.png")),
        "http://localhost:8000/media/avatars/a.png"
    );
}

#[test]
fn split_origin_separates_host_from_path() {
    assert_eq!(split_origin("http://localhost:8000/media"), ("http://localhost:8000", "/media"));
    assert_eq!(split_origin("https://cdn.example.com"), ("https://cdn.example.com", ""));
    assert_eq!(split_origin("/media"), ("", "/media"));
}

// Without the `hydrate` feature every backend call fails with
// `ApiError::Unavailable`, which exercises the store's failure paths.
#[cfg(not(feature = "hydrate"))]
mod token_store {
    use futures::executor::block_on;

    use super::*;
    use crate::net::types::User;

    fn store() -> TokenStore {
        TokenStore::new(
            RwSignal::new(AuthState::default()),
            RwSignal::new(CoursesState::default()),
            RwSignal::new(NotificationsState::default()),
            ApiConfig::default(),
        )
    }

    fn logged_in(store: &TokenStore) {
        let session = Session {
            token: "tok".to_owned(),
            user: User { id: 1, username: "alice".to_owned(), nickname: None, avatar: None },
        };
        store.auth.set(AuthState { session: Some(session) });
    }

    #[test]
    fn failed_login_returns_false_and_reports_error() {
        let store = store();
        let credentials = Credentials { username: "alice".to_owned(), password: "pw".to_owned() };

        assert!(!block_on(store.login(&credentials)));

        assert!(store.auth.get_untracked().session.is_none());
        let notices = store.notices.get_untracked();
        assert_eq!(notices.items.len(), 1);
        assert_eq!(notices.items[0].level, NoticeLevel::Error);
        assert_eq!(notices.items[0].text, LOGIN_FAILED);
    }

    #[test]
    fn logout_without_token_clears_session() {
        let store = store();
        block_on(store.logout());
        assert!(store.auth.get_untracked().session.is_none());
        assert!(store.notices.get_untracked().items.is_empty());
    }

    #[test]
    fn logout_clears_session_when_server_logout_fails() {
        let store = store();
        logged_in(&store);
        assert_eq!(store.auth.get_untracked().token(), Some("tok"));

        block_on(store.logout());

        assert!(store.auth.get_untracked().session.is_none());
    }

    #[test]
    fn failed_register_returns_false_without_notice() {
        let store = store();
        let request = RegisterRequest { username: "bob".to_owned(), password: "pw".to_owned() };
        assert!(!block_on(store.register(&request)));
        assert!(store.notices.get_untracked().items.is_empty());
    }
}
