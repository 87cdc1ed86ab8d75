//! REST API helpers for the learning-platform backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `ApiError::Unavailable` since these
//! endpoints are only called from browser event handlers.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ApiError>`; nothing here panics or notifies.
//! Turning failures into user-visible messages is the store's job.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
use super::types::{Course, Credentials, RegisterRequest, Session};
use crate::config::ApiConfig;

#[cfg(any(test, feature = "hydrate"))]
const LOGIN_PATH: &str = "user/login";
#[cfg(any(test, feature = "hydrate"))]
const REGISTER_PATH: &str = "user/register";
#[cfg(any(test, feature = "hydrate"))]
const LOGOUT_PATH: &str = "user/logout";
#[cfg(any(test, feature = "hydrate"))]
const COURSE_SEARCH_PATH: &str = "course/list";

/// Join an endpoint path onto the configured API base.
#[cfg(any(test, feature = "hydrate"))]
fn endpoint(config: &ApiConfig, path: &str) -> String {
    format!("{}/{}", config.api_base, path.trim_start_matches('/'))
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

#[cfg(feature = "hydrate")]
fn network(e: gloo_net::Error) -> ApiError {
    ApiError::Network(e.to_string())
}

#[cfg(feature = "hydrate")]
async fn status_error(resp: gloo_net::http::Response) -> ApiError {
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    ApiError::from_status(status, &body)
}

/// Log in via `POST /user/login` and build the resulting session.
///
/// # Errors
///
/// Returns an error if the request fails, the server responds with a non-OK
/// status, or the response carries no token.
pub async fn login(config: &ApiConfig, credentials: &Credentials) -> Result<Session, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        use super::types::LoginResponse;

        let resp = gloo_net::http::Request::post(&endpoint(config, LOGIN_PATH))
            .json(credentials)
            .map_err(network)?
            .send()
            .await
            .map_err(network)?;
        if !resp.ok() {
            return Err(status_error(resp).await);
        }
        let body: LoginResponse = resp.json().await.map_err(|e| ApiError::Decode(e.to_string()))?;
        let message = body.message.clone();
        body.into_session(&credentials.username)
            .ok_or(ApiError::MissingToken { message })
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, credentials);
        Err(ApiError::Unavailable)
    }
}

/// Create an account via `POST /user/register`.
///
/// # Errors
///
/// Returns an error if the request fails or the server responds with a non-OK status.
pub async fn register(config: &ApiConfig, request: &RegisterRequest) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&endpoint(config, REGISTER_PATH))
            .json(request)
            .map_err(network)?
            .send()
            .await
            .map_err(network)?;
        if !resp.ok() {
            return Err(status_error(resp).await);
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, request);
        Err(ApiError::Unavailable)
    }
}

/// Invalidate the session token server-side via `POST /user/logout`.
///
/// # Errors
///
/// Returns an error if the request fails or the server responds with a non-OK status.
pub async fn logout(config: &ApiConfig, token: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&endpoint(config, LOGOUT_PATH))
            .header("Authorization", &bearer(token))
            .send()
            .await
            .map_err(network)?;
        if !resp.ok() {
            return Err(status_error(resp).await);
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, token);
        Err(ApiError::Unavailable)
    }
}

/// Search courses via `GET /course/list?keyword=<query>`.
///
/// # Errors
///
/// Returns an error if the request fails, the server responds with a non-OK
/// status, or the body is not a course list.
pub async fn search_courses(config: &ApiConfig, query: &str) -> Result<Vec<Course>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        use super::types::CoursePayload;

        let resp = gloo_net::http::Request::get(&endpoint(config, COURSE_SEARCH_PATH))
            .query([("keyword", query)])
            .send()
            .await
            .map_err(network)?;
        if !resp.ok() {
            return Err(status_error(resp).await);
        }
        let payload: CoursePayload = resp.json().await.map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(payload.into_items())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, query);
        Err(ApiError::Unavailable)
    }
}
