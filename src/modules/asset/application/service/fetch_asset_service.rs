use async_trait::async_trait;

use crate::modules::asset::application::ports::incoming::use_cases::{
    FetchAssetError, FetchAssetUseCase,
};
use crate::modules::asset::application::ports::outgoing::asset_store::AssetStore;
use crate::modules::asset::domain::entities::{AssetKind, StoredAsset};

// ============================================================================
// Service Implementation
// ============================================================================

pub struct FetchAssetService<S>
where
    S: AssetStore,
{
    store: S,
}

impl<S> FetchAssetService<S>
where
    S: AssetStore,
{
    pub fn new(store: S) -> Self {
        Self { store }
    }
}

#[async_trait]
impl<S> FetchAssetUseCase for FetchAssetService<S>
where
    S: AssetStore + Send + Sync,
{
    async fn execute(&self, kind: AssetKind) -> Result<StoredAsset, FetchAssetError> {
        self.store.load(kind).await.map_err(FetchAssetError::from)
    }
}
