use async_trait::async_trait;

use crate::modules::testimonial::application::ports::incoming::use_cases::ListTestimonialsUseCase;
use crate::modules::testimonial::application::ports::outgoing::testimonial_source::TestimonialSource;
use crate::modules::testimonial::domain::entities::Testimonial;

// ============================================================================
// Service Implementation
// ============================================================================

pub struct ListTestimonialsService<S>
where
    S: TestimonialSource,
{
    source: S,
}

impl<S> ListTestimonialsService<S>
where
    S: TestimonialSource,
{
    pub fn new(source: S) -> Self {
        Self { source }
    }
}

#[async_trait]
impl<S> ListTestimonialsUseCase for ListTestimonialsService<S>
where
    S: TestimonialSource + Send + Sync,
{
    async fn execute(&self) -> Vec<Testimonial> {
        self.source.testimonials().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use async_trait::async_trait;

    /* --------------------------------------------------
     * Mock TestimonialSource
     * -------------------------------------------------- */

    #[derive(Clone)]
    struct MockTestimonialSource {
        testimonials: Vec<Testimonial>,
    }

    #[async_trait]
    impl TestimonialSource for MockTestimonialSource {
        async fn testimonials(&self) -> Vec<Testimonial> {
            self.testimonials.clone()
        }
    }

    /* --------------------------------------------------
     * Tests
     * -------------------------------------------------- */

    #[tokio::test]
    async fn execute_passes_the_source_through_in_order() {
        let source = MockTestimonialSource {
            testimonials: vec![
                Testimonial {
                    author: "First - Colleague".to_string(),
                    body: "one".to_string(),
                },
                Testimonial {
                    author: "Second - Manager".to_string(),
                    body: "two".to_string(),
                },
            ],
        };
        let service = ListTestimonialsService::new(source);

        let testimonials = service.execute().await;

        assert_eq!(testimonials.len(), 2);
        assert_eq!(testimonials[0].author, "First - Colleague");
        assert_eq!(testimonials[1].author, "Second - Manager");
    }
}
