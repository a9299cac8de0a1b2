use async_trait::async_trait;

use crate::modules::asset::domain::entities::{AssetKind, UploadedFile};

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum AcceptUploadError {
    /// Carries the allow-list so the 415 page can name what the
    /// control accepts.
    #[error("Unsupported media type: {content_type}")]
    UnsupportedMediaType {
        content_type: String,
        allowed: &'static [&'static str],
    },
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

/// Checks an upload against the MIME allow-list and acknowledges it.
/// Accepted files are logged and dropped; there is deliberately no
/// write path to the asset directory.
#[async_trait]
pub trait AcceptUploadUseCase: Send + Sync {
    async fn execute(&self, kind: AssetKind, upload: UploadedFile)
        -> Result<(), AcceptUploadError>;
}
