use async_trait::async_trait;
use tracing::info;

use crate::modules::asset::application::ports::incoming::use_cases::{
    AcceptUploadError, AcceptUploadUseCase,
};
use crate::modules::asset::domain::entities::{AssetKind, UploadedFile};
use crate::modules::asset::domain::policies::upload_policy::UploadPolicy;

// ============================================================================
// Service Implementation
// ============================================================================

/// Validates an upload's MIME type and acknowledges it. The upload is
/// then dropped: there is no storage behind this service, matching the
/// acknowledgment-only contract of the upload controls.
pub struct AcceptUploadService {
    policy: UploadPolicy,
}

impl AcceptUploadService {
    pub fn new(policy: UploadPolicy) -> Self {
        Self { policy }
    }
}

#[async_trait]
impl AcceptUploadUseCase for AcceptUploadService {
    async fn execute(
        &self,
        kind: AssetKind,
        upload: UploadedFile,
    ) -> Result<(), AcceptUploadError> {
        let allowed = self.policy.allowed_for(kind);
        if !allowed.contains(&upload.content_type.as_str()) {
            return Err(AcceptUploadError::UnsupportedMediaType {
                content_type: upload.content_type,
                allowed,
            });
        }

        info!(
            kind = ?kind,
            file_name = %upload.file_name,
            size = upload.size,
            "upload accepted and discarded"
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn upload(content_type: &str) -> UploadedFile {
        UploadedFile {
            file_name: "sample".to_string(),
            content_type: content_type.to_string(),
            size: 1024,
        }
    }

    #[tokio::test]
    async fn accepts_a_jpeg_profile_image() {
        let service = AcceptUploadService::new(UploadPolicy::default());

        let result = service
            .execute(AssetKind::ProfileImage, upload("image/jpeg"))
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn accepts_a_png_profile_image() {
        let service = AcceptUploadService::new(UploadPolicy::default());

        let result = service
            .execute(AssetKind::ProfileImage, upload("image/png"))
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn accepts_a_pdf_resume() {
        let service = AcceptUploadService::new(UploadPolicy::default());

        let result = service
            .execute(AssetKind::Resume, upload("application/pdf"))
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn rejects_a_disallowed_type_with_the_offending_mime() {
        let service = AcceptUploadService::new(UploadPolicy::default());

        let err = service
            .execute(AssetKind::Resume, upload("image/gif"))
            .await
            .unwrap_err();

        match err {
            AcceptUploadError::UnsupportedMediaType {
                content_type,
                allowed,
            } => {
                assert_eq!(content_type, "image/gif");
                assert_eq!(allowed, UploadPolicy::DEFAULT_RESUME_MIME_TYPES);
            }
        }
    }
}
