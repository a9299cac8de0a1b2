use async_trait::async_trait;

use crate::modules::testimonial::application::ports::outgoing::testimonial_source::TestimonialSource;
use crate::modules::testimonial::domain::entities::Testimonial;

/// The authored testimonials.
#[derive(Clone, Default)]
pub struct SeedTestimonials;

impl SeedTestimonials {
    pub fn testimonials() -> Vec<Testimonial> {
        vec![
            Testimonial {
                author: "Dr. Theodore M. - Professor of Computer Science".to_string(),
                body: "Cyuzuzo is an exceptional student with remarkable problem-solving \
                       abilities. His final year project demonstrates innovative thinking \
                       and practical application of advanced concepts."
                    .to_string(),
            },
            Testimonial {
                author: "Uwase Marie - Project Team Member".to_string(),
                body: "Working with Samuel on our AI Chatbot project was an enriching \
                       experience. His technical expertise and leadership skills were \
                       crucial to our team's success."
                    .to_string(),
            },
            Testimonial {
                author: "Jean-Paul K. - Caritas CDJP Gikongoro IT Manager".to_string(),
                body: "The website Samuel developed during his internship significantly \
                       improved our online presence. His attention to detail and commitment \
                       to meeting project requirements were exemplary."
                    .to_string(),
            },
        ]
    }
}

#[async_trait]
impl TestimonialSource for SeedTestimonials {
    async fn testimonials(&self) -> Vec<Testimonial> {
        Self::testimonials()
    }
}
