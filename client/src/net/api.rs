//! REST API helpers for the profile endpoint.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning [`ApiError::Unavailable`] since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result` outputs instead of panics so a failed profile fetch
//! turns into a login failure event rather than a crashed hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{ApiError, ProfileService};
use crate::state::user::UserRecord;

/// Path of the current user's profile resource.
pub const PROFILE_ENDPOINT: &str = "/api/user/profile";

#[cfg(any(test, feature = "hydrate"))]
fn status_error(status: u16) -> Result<(), ApiError> {
    if (200..300).contains(&status) { Ok(()) } else { Err(ApiError::Status(status)) }
}

/// Fetch the current user's profile from [`PROFILE_ENDPOINT`].
///
/// # Errors
///
/// Returns an error if the request fails, the server answers with a non-2xx
/// status, or the body is not a JSON object.
pub async fn fetch_profile() -> Result<UserRecord, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(PROFILE_ENDPOINT)
            .send()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;
        status_error(resp.status())?;
        resp.json::<UserRecord>().await.map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Store `user` via `PUT` on [`PROFILE_ENDPOINT`], returning the saved record.
///
/// # Errors
///
/// Returns an error if the request fails or the server rejects the record.
pub async fn update_profile(user: &UserRecord) -> Result<UserRecord, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::put(PROFILE_ENDPOINT)
            .json(user)
            .map_err(|e| ApiError::Request(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;
        status_error(resp.status())?;
        resp.json::<UserRecord>().await.map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = user;
        Err(ApiError::Unavailable)
    }
}

/// [`ProfileService`] backed by the HTTP endpoint.
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpProfileService;

impl ProfileService for HttpProfileService {
    async fn fetch_profile(&self) -> Result<UserRecord, ApiError> {
        fetch_profile().await
    }
}
