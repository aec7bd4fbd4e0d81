//! Server configuration parsed from environment variables.

use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT: {0}")]
    InvalidPort(String),
    #[error("failed to read profile seed {path}: {source}")]
    SeedRead { path: PathBuf, source: std::io::Error },
    #[error("profile seed {path} is not a JSON object")]
    SeedShape { path: PathBuf },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub profile_seed_path: Option<PathBuf>,
}

impl ServerConfig {
    /// Build typed server config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `PROFILE_SEED_PATH`: JSON object file used as the initial profile
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = parse_port(std::env::var("PORT").ok().as_deref())?;
        let profile_seed_path = std::env::var("PROFILE_SEED_PATH")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);
        Ok(Self { port, profile_seed_path })
    }
}

fn parse_port(raw: Option<&str>) -> Result<u16, ConfigError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(DEFAULT_PORT),
        Some(v) => v.parse().map_err(|_| ConfigError::InvalidPort(v.to_owned())),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
