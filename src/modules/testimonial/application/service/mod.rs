mod list_testimonials_service;
mod submit_testimonial_service;

pub use list_testimonials_service::ListTestimonialsService;
pub use submit_testimonial_service::SubmitTestimonialService;
