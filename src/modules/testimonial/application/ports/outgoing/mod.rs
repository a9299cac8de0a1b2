pub mod testimonial_source;
