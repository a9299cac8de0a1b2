use async_trait::async_trait;

use crate::modules::testimonial::domain::entities::Testimonial;

//
// ──────────────────────────────────────────────────────────
// Outgoing Port
// ──────────────────────────────────────────────────────────
//

/// Source of the published testimonials. Fixed content, no error path.
#[async_trait]
pub trait TestimonialSource: Send + Sync {
    async fn testimonials(&self) -> Vec<Testimonial>;
}
