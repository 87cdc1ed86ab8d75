//! Decision logic behind the site header's search and auth controls.
//!
//! SYSTEM CONTEXT
//! ==============
//! `SiteHeader` wires DOM events to these functions and applies the returned
//! outcomes to its local modal signal. Keeping the logic generic over
//! `AuthStore` and `Notifier` lets it run without a browser.
//!
//! ERROR HANDLING
//! ==============
//! Nothing here returns an error. Validation failures, store rejections and
//! off-route searches all become notices (or silence, for login failures,
//! which the store reports itself).

#[cfg(test)]
#[path = "header_actions_test.rs"]
mod header_actions_test;

use crate::config::ApiConfig;
use crate::net::types::{Credentials, RegisterForm};
use crate::state::auth::AuthState;
use crate::state::notify::{NoticeLevel, Notifier};
use crate::state::store::{AuthStore, resolve_avatar_url};
use crate::state::ui::SubmitOutcome;

pub const SEARCH_UNAVAILABLE: &str = "当前页面无法搜索";
pub const PASSWORD_MISMATCH: &str = "两次输入的密码不一致！";
pub const REGISTER_SUCCEEDED: &str = "注册成功！请登录";
pub const REGISTER_FAILED: &str = "注册失败，请重试！";

/// Routes whose page shows course search results.
pub const SEARCHABLE_PATHS: [&str; 2] = ["/", "/courses"];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Empty query; nothing happened.
    Ignored,
    /// Current page has no search results; a warning was shown.
    Unavailable,
    /// Query handed to the store.
    Dispatched,
}

/// What the right-hand side of the header shows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HeaderControls {
    Account { display_name: String, avatar_url: String },
    LoginTrigger,
}

pub fn search_allowed(path: &str) -> bool {
    SEARCHABLE_PATHS.contains(&path)
}

/// Handle a search submit from the header search box.
pub fn on_search<S, N>(store: &S, notifier: &N, path: &str, query: &str) -> SearchOutcome
where
    S: AuthStore,
    N: Notifier,
{
    if query.is_empty() {
        return SearchOutcome::Ignored;
    }
    if !search_allowed(path) {
        notifier.push_notice(NoticeLevel::Warning, SEARCH_UNAVAILABLE);
        return SearchOutcome::Unavailable;
    }
    store.search_courses(query);
    SearchOutcome::Dispatched
}

/// Handle a login submit. The header adds no notice of its own on failure.
pub async fn handle_login<S: AuthStore>(store: &S, credentials: &Credentials) -> SubmitOutcome {
    if store.login(credentials).await {
        SubmitOutcome::Succeeded
    } else {
        SubmitOutcome::Failed
    }
}

/// Handle a register submit: validate locally, then forward without the
/// confirmation field.
pub async fn handle_register<S, N>(store: &S, notifier: &N, form: &RegisterForm) -> SubmitOutcome
where
    S: AuthStore,
    N: Notifier,
{
    if !form.passwords_match() {
        notifier.push_notice(NoticeLevel::Error, PASSWORD_MISMATCH);
        return SubmitOutcome::Rejected;
    }
    if store.register(&form.to_request()).await {
        notifier.push_notice(NoticeLevel::Success, REGISTER_SUCCEEDED);
        SubmitOutcome::Succeeded
    } else {
        notifier.push_notice(NoticeLevel::Error, REGISTER_FAILED);
        SubmitOutcome::Failed
    }
}

pub async fn handle_logout<S: AuthStore>(store: &S) {
    store.logout().await;
}

/// Choose the header's account controls from the current auth state.
pub fn header_controls(auth: &AuthState, config: &ApiConfig) -> HeaderControls {
    match auth.user() {
        Some(user) => HeaderControls::Account {
            display_name: user.display_name().to_owned(),
            avatar_url: resolve_avatar_url(config, user.avatar.as_deref()),
        },
        None => HeaderControls::LoginTrigger,
    }
}
