use async_trait::async_trait;
use tracing::info;

use crate::modules::contact::application::ports::incoming::use_cases::{
    ContactMessage, SubmitContactMessageUseCase,
};

// ============================================================================
// Service Implementation
// ============================================================================

/// Acknowledgment sink for the contact form. There is no mail
/// transport behind it; submissions go to the log and are dropped.
#[derive(Clone, Default)]
pub struct SubmitContactMessageService;

#[async_trait]
impl SubmitContactMessageUseCase for SubmitContactMessageService {
    async fn execute(&self, message: ContactMessage) {
        info!(
            name = %message.name,
            email = %message.email,
            subject = %message.subject,
            "contact message received; no delivery configured"
        );
    }
}
