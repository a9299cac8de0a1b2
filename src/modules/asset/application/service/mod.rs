mod accept_upload_service;
mod fetch_asset_service;

pub use accept_upload_service::AcceptUploadService;
pub use fetch_asset_service::FetchAssetService;
