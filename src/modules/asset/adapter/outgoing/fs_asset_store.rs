use std::path::PathBuf;

use async_trait::async_trait;

use crate::modules::asset::application::ports::outgoing::asset_store::{
    AssetStore, AssetStoreError,
};
use crate::modules::asset::domain::entities::{AssetKind, StoredAsset};

/// Serves assets from a flat directory (`ASSET_DIR`). Each kind maps
/// to one fixed file name inside it.
#[derive(Clone)]
pub struct FsAssetStore {
    root: PathBuf,
}

impl FsAssetStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Readiness probe. Individual files may still be absent; that is
    /// an expected state, not unreadiness.
    pub async fn probe_root(&self) -> bool {
        matches!(tokio::fs::metadata(&self.root).await, Ok(meta) if meta.is_dir())
    }
}

#[async_trait]
impl AssetStore for FsAssetStore {
    async fn load(&self, kind: AssetKind) -> Result<StoredAsset, AssetStoreError> {
        let path = self.root.join(kind.file_name());

        match tokio::fs::read(&path).await {
            Ok(bytes) => Ok(StoredAsset { kind, bytes }),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                Err(AssetStoreError::NotFound)
            }
            Err(err) => Err(AssetStoreError::Io(format!(
                "{}: {}",
                path.display(),
                err
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn loads_an_existing_resume() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("resume.pdf"), b"%PDF-1.4 fake").unwrap();

        let store = FsAssetStore::new(dir.path());
        let asset = store.load(AssetKind::Resume).await.unwrap();

        assert_eq!(asset.kind, AssetKind::Resume);
        assert_eq!(asset.bytes, b"%PDF-1.4 fake");
    }

    #[tokio::test]
    async fn loads_the_profile_image_by_its_fixed_name() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("person.jpg"), b"jpegdata").unwrap();

        let store = FsAssetStore::new(dir.path());
        let asset = store.load(AssetKind::ProfileImage).await.unwrap();

        assert_eq!(asset.bytes, b"jpegdata");
    }

    #[tokio::test]
    async fn missing_file_is_not_found_rather_than_io_error() {
        let dir = tempfile::tempdir().unwrap();

        let store = FsAssetStore::new(dir.path());
        let err = store.load(AssetKind::Resume).await.unwrap_err();

        assert!(matches!(err, AssetStoreError::NotFound));
    }

    #[tokio::test]
    async fn probe_reports_whether_the_root_exists() {
        let dir = tempfile::tempdir().unwrap();

        let store = FsAssetStore::new(dir.path());
        assert!(store.probe_root().await);

        let gone = FsAssetStore::new(dir.path().join("missing"));
        assert!(!gone.probe_root().await);
    }
}
