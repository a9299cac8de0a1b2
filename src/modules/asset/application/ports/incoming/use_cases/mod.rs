mod accept_upload;
mod fetch_asset;

pub use accept_upload::{AcceptUploadError, AcceptUploadUseCase};
pub use fetch_asset::{FetchAssetError, FetchAssetUseCase};
