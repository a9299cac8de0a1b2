mod fs_asset_store;

pub use fs_asset_store::FsAssetStore;
