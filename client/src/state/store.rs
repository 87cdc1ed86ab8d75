//! Auth/course store: the collaborator the header delegates to.
//!
//! SYSTEM CONTEXT
//! ==============
//! `AuthStore` is the contract the header flow is written against.
//! `TokenStore` implements it on top of the shared signals and the REST
//! client; tests substitute a recording fake.
//!
//! ERROR HANDLING
//! ==============
//! Store operations never return errors. Failures are logged, reported as a
//! notice where the store owns the message (login), and collapsed to `false`.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use leptos::prelude::*;

use super::auth::AuthState;
use super::courses::CoursesState;
use super::notify::{NoticeLevel, NotificationsState, Notifier};
use crate::config::ApiConfig;
use crate::net::api;
use crate::net::types::{Credentials, RegisterRequest, Session};
use crate::util::storage;

pub const SESSION_STORAGE_KEY: &str = "voltx_session";
pub const DEFAULT_AVATAR_URL: &str = "/default-avatar.svg";

pub const LOGIN_SUCCEEDED: &str = "登录成功";
pub const LOGIN_FAILED: &str = "登录失败";

/// Operations the header needs from the auth/course store.
#[allow(async_fn_in_trait)]
pub trait AuthStore {
    /// Attempt a login. `true` when a session was established.
    async fn login(&self, credentials: &Credentials) -> bool;

    /// End the current session.
    async fn logout(&self);

    /// Attempt to create an account. `true` when the backend accepted it.
    async fn register(&self, request: &RegisterRequest) -> bool;

    /// Start a course search. Results land in shared state, not here.
    fn search_courses(&self, query: &str);
}

/// Resolve an avatar reference into a URL the browser can load.
///
/// Absolute `http(s)://`, protocol-relative, and `data:` references pass
/// through. Relative references are joined onto the media base with a single
/// slash. Missing or blank references give the bundled default avatar.
pub fn resolve_avatar_url(config: &ApiConfig, reference: Option<&str>) -> String {
    let Some(reference) = reference.map(str::trim).filter(|r| !r.is_empty()) else {
        return DEFAULT_AVATAR_URL.to_owned();
    };
    if reference.starts_with("http://")
        || reference.starts_with("https://")
        || reference.starts_with("//")
        || reference.starts_with("data:")
    {
        return reference.to_owned();
    }
    let path = reference.trim_start_matches('/');
    let (origin, media_path) = split_origin(config.media_base);
    let media_path = media_path.trim_matches('/');
    // Django returns `/media/...` refs that already carry the media path.
    if !media_path.is_empty() && path.starts_with(&format!("{media_path}/")) {
        return format!("{origin}/{path}");
    }
    format!("{}/{}", config.media_base, path)
}

/// Split `scheme://host[:port]/path` into its origin and path parts.
/// A base without a scheme has an empty origin.
fn split_origin(base: &str) -> (&str, &str) {
    let Some(scheme_end) = base.find("://").map(|i| i + 3) else {
        return ("", base);
    };
    match base.get(scheme_end..).and_then(|rest| rest.find('/')) {
        Some(slash) => base.split_at(scheme_end + slash),
        None => (base, ""),
    }
}

/// Signal-backed store talking to the learning-platform backend.
#[derive(Clone, Copy)]
pub struct TokenStore {
    auth: RwSignal<AuthState>,
    courses: RwSignal<CoursesState>,
    notices: RwSignal<NotificationsState>,
    config: ApiConfig,
}

impl TokenStore {
    pub fn new(
        auth: RwSignal<AuthState>,
        courses: RwSignal<CoursesState>,
        notices: RwSignal<NotificationsState>,
        config: ApiConfig,
    ) -> Self {
        Self { auth, courses, notices, config }
    }

    pub fn config(&self) -> ApiConfig {
        self.config
    }

    /// Reactive read of the current auth state.
    pub fn auth(&self) -> AuthState {
        self.auth.get()
    }

    /// Resolve a non-avatar media reference (course covers).
    pub fn media_url(&self, reference: &str) -> String {
        resolve_avatar_url(&self.config, Some(reference))
    }

    /// Reload a persisted session after hydration.
    pub fn restore(&self) {
        if let Some(session) = storage::load_json::<Session>(SESSION_STORAGE_KEY) {
            log::debug!("restored session for {}", session.user.username);
            self.auth.update(|a| a.session = Some(session));
        }
    }
}

impl AuthStore for TokenStore {
    async fn login(&self, credentials: &Credentials) -> bool {
        match api::login(&self.config, credentials).await {
            Ok(session) => {
                log::debug!("login succeeded for {}", session.user.username);
                if let Err(e) = storage::save_json(SESSION_STORAGE_KEY, &session) {
                    log::warn!("session not persisted: {e}");
                }
                self.auth.update(|a| a.session = Some(session));
                self.notices.push_notice(NoticeLevel::Success, LOGIN_SUCCEEDED);
                true
            }
            Err(e) => {
                log::warn!("login failed: {e}");
                self.notices.push_notice(NoticeLevel::Error, e.user_message().unwrap_or(LOGIN_FAILED));
                false
            }
        }
    }

    async fn logout(&self) {
        let token = self.auth.get_untracked().token().map(str::to_owned);
        if let Some(token) = token {
            if let Err(e) = api::logout(&self.config, &token).await {
                log::warn!("server logout failed: {e}");
            }
        }
        storage::remove(SESSION_STORAGE_KEY);
        self.auth.update(|a| a.session = None);
    }

    async fn register(&self, request: &RegisterRequest) -> bool {
        match api::register(&self.config, request).await {
            Ok(()) => true,
            Err(e) => {
                log::warn!("register failed for {}: {e}", request.username);
                false
            }
        }
    }

    fn search_courses(&self, query: &str) {
        let query = query.to_owned();
        let courses = self.courses;
        let config = self.config;
        let seq = courses.try_update(|c| c.begin(&query)).unwrap_or_default();
        leptos::task::spawn_local(async move {
            let result = api::search_courses(&config, &query).await;
            if let Err(e) = &result {
                log::warn!("course search failed: {e}");
            }
            courses.update(|c| c.finish(seq, result));
        });
    }
}
