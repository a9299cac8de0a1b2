use async_trait::async_trait;

/// A visitor-submitted contact message, exactly as typed into the form.
#[derive(Debug, Clone, PartialEq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

/// Acknowledges a contact-form submission. No mail is sent; the
/// message is recorded only in the log.
#[async_trait]
pub trait SubmitContactMessageUseCase: Send + Sync {
    async fn execute(&self, message: ContactMessage);
}
