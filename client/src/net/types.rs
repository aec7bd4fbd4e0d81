//! Error and service types for the remote profile boundary.
//!
//! DESIGN
//! ======
//! `ProfileService` is the seam the login flow awaits on. The browser build
//! plugs in [`super::api::HttpProfileService`]; tests plug in canned futures.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use crate::state::user::UserRecord;

/// Failure talking to the profile endpoint.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Request(String),
    #[error("unexpected status: {0}")]
    Status(u16),
    #[error("invalid response body: {0}")]
    Decode(String),
    #[error("not available on server")]
    Unavailable,
}

/// Remote Profile Service: parameterless fetch of the signed-in user's record.
#[allow(async_fn_in_trait)]
pub trait ProfileService {
    /// # Errors
    ///
    /// Returns an [`ApiError`] when the request cannot be completed or the
    /// service rejects it.
    async fn fetch_profile(&self) -> Result<UserRecord, ApiError>;
}
