//! Current-user profile routes.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;
use profile_client::state::user::UserRecord;
use serde_json::Value;

use crate::state::AppState;

#[derive(Debug, thiserror::Error)]
pub enum ProfileError {
    #[error("profile update must be a JSON object")]
    NotAnObject,
}

pub(crate) fn profile_error_to_status(err: &ProfileError) -> StatusCode {
    match err {
        ProfileError::NotAnObject => StatusCode::UNPROCESSABLE_ENTITY,
    }
}

/// Write the keys of `body` over `current`.
pub(crate) fn merge_update(current: &UserRecord, body: Value) -> Result<UserRecord, ProfileError> {
    let update = UserRecord::from_value(body).ok_or(ProfileError::NotAnObject)?;
    Ok(current.merged_with(update.as_map()))
}

/// `GET /api/user/profile`: return the current profile record.
pub async fn get_profile(State(state): State<AppState>) -> Json<UserRecord> {
    Json(state.profile.read().await.clone())
}

/// `PUT /api/user/profile`: merge the body over the stored record.
pub async fn update_profile(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<UserRecord>, StatusCode> {
    let mut profile = state.profile.write().await;
    let merged = merge_update(&profile, body).map_err(|e| {
        tracing::warn!(error = %e, "rejected profile update");
        profile_error_to_status(&e)
    })?;
    *profile = merged.clone();
    tracing::info!(keys = merged.as_map().len(), "profile updated");
    Ok(Json(merged))
}

#[cfg(test)]
#[path = "profile_test.rs"]
mod tests;
