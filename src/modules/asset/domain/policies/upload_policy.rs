use crate::modules::asset::domain::entities::AssetKind;

/// MIME allow-lists for the two upload controls. Nothing else about an
/// upload is checked; size and content pass through untouched because
/// accepted files are discarded anyway.
#[derive(Debug, Clone)]
pub struct UploadPolicy {
    pub allowed_image_mime_types: &'static [&'static str],
    pub allowed_resume_mime_types: &'static [&'static str],
}

impl UploadPolicy {
    pub const DEFAULT_IMAGE_MIME_TYPES: &'static [&'static str] = &["image/jpeg", "image/png"];
    pub const DEFAULT_RESUME_MIME_TYPES: &'static [&'static str] = &["application/pdf"];

    pub fn allowed_for(&self, kind: AssetKind) -> &'static [&'static str] {
        match kind {
            AssetKind::ProfileImage => self.allowed_image_mime_types,
            AssetKind::Resume => self.allowed_resume_mime_types,
        }
    }

    pub fn allows(&self, kind: AssetKind, content_type: &str) -> bool {
        self.allowed_for(kind).contains(&content_type)
    }
}

impl Default for UploadPolicy {
    fn default() -> Self {
        Self {
            allowed_image_mime_types: Self::DEFAULT_IMAGE_MIME_TYPES,
            allowed_resume_mime_types: Self::DEFAULT_RESUME_MIME_TYPES,
        }
    }
}
