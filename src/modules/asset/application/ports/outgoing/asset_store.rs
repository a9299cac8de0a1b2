use async_trait::async_trait;

use crate::modules::asset::domain::entities::{AssetKind, StoredAsset};

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum AssetStoreError {
    #[error("Asset not found")]
    NotFound,

    #[error("Storage error: {0}")]
    Io(String),
}

//
// ──────────────────────────────────────────────────────────
// Outgoing Port
// ──────────────────────────────────────────────────────────
//

/// Read access to the optional on-disk assets. Absence is an expected
/// state, not a fault.
#[async_trait]
pub trait AssetStore: Send + Sync {
    async fn load(&self, kind: AssetKind) -> Result<StoredAsset, AssetStoreError>;
}
