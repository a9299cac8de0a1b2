pub mod asset;
pub mod contact;
pub mod profile;
pub mod project;
pub mod skill;
pub mod testimonial;
pub mod timeline;
