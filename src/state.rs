//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the single profile record served to the client. There is no
//! database; the record lives for the lifetime of the process.

use std::path::Path;
use std::sync::Arc;

use profile_client::state::user::UserRecord;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::config::ConfigError;

/// Shared application state, injected into Axum handlers via State extractor.
#[derive(Clone)]
pub struct AppState {
    pub profile: Arc<RwLock<UserRecord>>,
}

impl AppState {
    #[must_use]
    pub fn new(profile: UserRecord) -> Self {
        Self { profile: Arc::new(RwLock::new(profile)) }
    }
}

/// Built-in profile used when no seed file is configured.
#[must_use]
pub fn demo_profile() -> UserRecord {
    let mut user = UserRecord::new();
    user.insert("id", Uuid::new_v4().to_string());
    user.insert("givenName", "Ada");
    user.insert("familyName", "Lovelace");
    user.insert("nickname", "ada");
    user.insert("email", "ada@example.com");
    user.insert("emailVerified", true);
    user.insert("gender", "female");
    user.insert("locale", "en-GB");
    user.insert("notes", "");
    user.insert("picture", "https://www.gravatar.com/avatar/?d=identicon");
    user
}

/// Read a seed profile from a JSON object file.
pub fn load_seed(path: &Path) -> Result<UserRecord, ConfigError> {
    let raw = std::fs::read_to_string(path)
        .map_err(|source| ConfigError::SeedRead { path: path.to_path_buf(), source })?;
    serde_json::from_str::<serde_json::Value>(&raw)
        .ok()
        .and_then(UserRecord::from_value)
        .ok_or_else(|| ConfigError::SeedShape { path: path.to_path_buf() })
}

#[cfg(test)]
#[path = "state_test.rs"]
mod tests;
