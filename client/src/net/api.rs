//! REST API helpers for communicating with the post-generation backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `ApiError::Unavailable` since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure collapses into `ApiError`. The UI reports all variants the
//! same way (a transient toast) and never retries.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{AuthResponse, Credentials, GenerateRequest, SaveRequest, SavedPost};
#[cfg(feature = "hydrate")]
use super::types::{GenerateResponse, SavedPostList};

pub const SAVED_POSTS_PATH: &str = "/home/";
pub const GENERATE_PATH: &str = "/generate_post/";
pub const SAVE_PATH: &str = "/generate_post/save";
pub const LOGIN_PATH: &str = "/auth/login/";
pub const REGISTER_PATH: &str = "/auth/register/";

/// Failure of a backend call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request could not be built or sent.
    #[error("request failed: {0}")]
    Request(String),

    /// The backend answered with a non-2xx status.
    #[error("server responded with status {0}")]
    Status(u16),

    /// The response body did not match the expected schema.
    #[error("response decode failed: {0}")]
    Decode(String),

    /// Called outside the browser.
    #[error("not available on server")]
    Unavailable,
}

#[cfg(any(test, feature = "hydrate"))]
fn endpoint(path: &str) -> String {
    format!("{}/{}", crate::config::api_base_url(), path.trim_start_matches('/'))
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer_header(token: &str) -> String {
    format!("Bearer {token}")
}

#[cfg(feature = "hydrate")]
fn authorized(builder: gloo_net::http::RequestBuilder, token: Option<&str>) -> gloo_net::http::RequestBuilder {
    match token {
        Some(t) => builder.header("Authorization", &bearer_header(t)),
        None => builder,
    }
}

#[cfg(feature = "hydrate")]
fn check_status(path: &str, resp: gloo_net::http::Response) -> Result<gloo_net::http::Response, ApiError> {
    if resp.ok() {
        Ok(resp)
    } else {
        log::warn!("{path} failed with status {}", resp.status());
        Err(ApiError::Status(resp.status()))
    }
}

#[cfg(feature = "hydrate")]
async fn get(path: &str, token: Option<&str>) -> Result<gloo_net::http::Response, ApiError> {
    let resp = authorized(gloo_net::http::Request::get(&endpoint(path)), token)
        .send()
        .await
        .map_err(|e| ApiError::Request(e.to_string()))?;
    check_status(path, resp)
}

#[cfg(feature = "hydrate")]
async fn post_json<B: serde::Serialize>(
    path: &str,
    token: Option<&str>,
    body: &B,
) -> Result<gloo_net::http::Response, ApiError> {
    let resp = authorized(gloo_net::http::Request::post(&endpoint(path)), token)
        .json(body)
        .map_err(|e| ApiError::Request(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Request(e.to_string()))?;
    check_status(path, resp)
}

/// Fetch every saved post from `GET /home/`, in server order.
///
/// # Errors
///
/// Returns an error if the request fails, the status is not 2xx, or the body
/// does not decode.
pub async fn fetch_saved_posts(token: Option<String>) -> Result<Vec<SavedPost>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = get(SAVED_POSTS_PATH, token.as_deref()).await?;
        let body: SavedPostList = resp.json().await.map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(body.result)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Err(ApiError::Unavailable)
    }
}

/// Request a generated post via `POST /generate_post/`.
///
/// # Errors
///
/// Returns an error if the request fails, the status is not 2xx, or the body
/// does not decode.
pub async fn generate_post(token: Option<String>, req: GenerateRequest) -> Result<String, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = post_json(GENERATE_PATH, token.as_deref(), &req).await?;
        let body: GenerateResponse = resp.json().await.map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(body.post)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, req);
        Err(ApiError::Unavailable)
    }
}

/// Persist a generated post via `POST /generate_post/save`.
///
/// # Errors
///
/// Returns an error if the request fails or the status is not 2xx.
pub async fn save_post(token: Option<String>, req: SaveRequest) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        post_json(SAVE_PATH, token.as_deref(), &req).await?;
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, req);
        Err(ApiError::Unavailable)
    }
}

/// Exchange credentials for a bearer token via `POST /auth/login/`.
///
/// # Errors
///
/// Returns an error if the request fails, the credentials are rejected, or the
/// body does not decode.
pub async fn login(credentials: Credentials) -> Result<AuthResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = post_json(LOGIN_PATH, None, &credentials).await?;
        resp.json::<AuthResponse>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = credentials;
        Err(ApiError::Unavailable)
    }
}

/// Create an account via `POST /auth/register/`.
///
/// # Errors
///
/// Returns an error if the request fails or the status is not 2xx.
pub async fn register(credentials: Credentials) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        post_json(REGISTER_PATH, None, &credentials).await?;
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = credentials;
        Err(ApiError::Unavailable)
    }
}
