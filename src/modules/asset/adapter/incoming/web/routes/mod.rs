mod download_asset;
mod upload_asset;

pub use download_asset::{download_resume_handler, profile_photo_handler};
pub use upload_asset::{upload_photo_handler, upload_resume_handler};
