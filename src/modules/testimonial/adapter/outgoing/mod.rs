mod seed_testimonials;

pub use seed_testimonials::SeedTestimonials;
