//! Error types for the garden boundaries (saves, config, storage).

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GardenError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unsupported save version {found} (expected at most {supported})")]
    UnsupportedVersion { found: u32, supported: u32 },

    #[error("storage unavailable: {0}")]
    Storage(String),
}
