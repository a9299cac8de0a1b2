use async_trait::async_trait;

/// A visitor-submitted testimonial, exactly as typed into the form.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTestimonial {
    pub author: String,
    pub body: String,
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

/// Acknowledges a testimonial submission. The submission is recorded
/// only in the log; the published list never changes at runtime.
#[async_trait]
pub trait SubmitTestimonialUseCase: Send + Sync {
    async fn execute(&self, testimonial: NewTestimonial);
}
