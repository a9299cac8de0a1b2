mod submit_testimonial;
mod testimonials_page;

pub use submit_testimonial::submit_testimonial_handler;
pub use testimonials_page::testimonials_page_handler;
