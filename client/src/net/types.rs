//! Wire DTOs for the learning-platform REST backend.
//!
//! DESIGN
//! ======
//! Form records (`Credentials`, `RegisterForm`) live here too so the header
//! flow, the login dialog, and the store all speak the same types. Only the
//! request shapes are ever serialized; `RegisterForm` never leaves the client.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// A platform user as returned alongside a login token.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Backend user ID.
    #[serde(default)]
    pub id: i64,
    /// Login name.
    pub username: String,
    /// Optional display name.
    #[serde(default)]
    pub nickname: Option<String>,
    /// Avatar reference: absolute URL or a path relative to the media base.
    #[serde(default)]
    pub avatar: Option<String>,
}

impl User {
    /// Name shown in the header: nickname when set, otherwise the username.
    pub fn display_name(&self) -> &str {
        self.nickname
            .as_deref()
            .filter(|n| !n.trim().is_empty())
            .unwrap_or(&self.username)
    }
}

/// An authenticated session: bearer token plus the user it belongs to.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user: User,
}

/// Login form values, sent as-is to `POST /user/login`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Register form values as collected by the dialog.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterForm {
    pub username: String,
    pub password: String,
    pub confirm_password: String,
}

impl RegisterForm {
    pub fn passwords_match(&self) -> bool {
        self.password == self.confirm_password
    }

    /// Payload for `POST /user/register`; the confirmation field is dropped.
    pub fn to_request(&self) -> RegisterRequest {
        RegisterRequest { username: self.username.clone(), password: self.password.clone() }
    }
}

/// Body of `POST /user/register`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
}

/// Body of a login response. The backend only guarantees `token`.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub user: Option<User>,
    #[serde(default, alias = "msg", alias = "detail")]
    pub message: Option<String>,
}

impl LoginResponse {
    /// Turn the response into a session, falling back to a bare user record
    /// named after the submitted username when the backend omits `user`.
    pub fn into_session(self, username: &str) -> Option<Session> {
        let token = self.token.filter(|t| !t.is_empty())?;
        let user = self.user.unwrap_or_else(|| User {
            id: 0,
            username: username.to_owned(),
            nickname: None,
            avatar: None,
        });
        Some(Session { token, user })
    }
}

/// A course entry from the course listing/search endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub id: i64,
    #[serde(alias = "name")]
    pub title: String,
    #[serde(default)]
    pub cover: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Course search payload; the backend has shipped both a bare array and a
/// wrapped `{ "items": [...] }` object.
#[derive(Clone, Debug, Deserialize)]
#[serde(untagged)]
pub enum CoursePayload {
    List(Vec<Course>),
    Wrapped { items: Vec<Course> },
}

impl CoursePayload {
    pub fn into_items(self) -> Vec<Course> {
        match self {
            Self::List(items) | Self::Wrapped { items } => items,
        }
    }
}
