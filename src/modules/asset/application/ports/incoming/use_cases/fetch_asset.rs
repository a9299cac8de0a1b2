use async_trait::async_trait;

use crate::modules::asset::application::ports::outgoing::asset_store::AssetStoreError;
use crate::modules::asset::domain::entities::{AssetKind, StoredAsset};

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum FetchAssetError {
    #[error("Asset not found")]
    NotFound,

    #[error("Read failed: {0}")]
    ReadFailed(String),
}

impl From<AssetStoreError> for FetchAssetError {
    fn from(err: AssetStoreError) -> Self {
        match err {
            AssetStoreError::NotFound => FetchAssetError::NotFound,
            AssetStoreError::Io(msg) => FetchAssetError::ReadFailed(msg),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

/// Loads one of the optional assets for serving. `NotFound` is the
/// normal "file was never provided" case; callers degrade to their
/// fallback rendering instead of failing the request.
#[async_trait]
pub trait FetchAssetUseCase: Send + Sync {
    async fn execute(&self, kind: AssetKind) -> Result<StoredAsset, FetchAssetError>;
}
