use async_trait::async_trait;

use crate::modules::testimonial::domain::entities::Testimonial;

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

/// Returns the published testimonials in authored order.
#[async_trait]
pub trait ListTestimonialsUseCase: Send + Sync {
    async fn execute(&self) -> Vec<Testimonial>;
}
