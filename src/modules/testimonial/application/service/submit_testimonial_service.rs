use async_trait::async_trait;
use tracing::info;

use crate::modules::testimonial::application::ports::incoming::use_cases::{
    NewTestimonial, SubmitTestimonialUseCase,
};

// ============================================================================
// Service Implementation
// ============================================================================

/// Acknowledgment sink for the testimonial form. Submissions go to the
/// log and nowhere else; the published list is fixed.
#[derive(Clone, Default)]
pub struct SubmitTestimonialService;

#[async_trait]
impl SubmitTestimonialUseCase for SubmitTestimonialService {
    async fn execute(&self, testimonial: NewTestimonial) {
        info!(
            author = %testimonial.author,
            body_len = testimonial.body.len(),
            "testimonial received for review; not published"
        );
    }
}
