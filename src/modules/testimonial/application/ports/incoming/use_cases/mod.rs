mod list_testimonials;
mod submit_testimonial;

pub use list_testimonials::ListTestimonialsUseCase;
pub use submit_testimonial::{NewTestimonial, SubmitTestimonialUseCase};
