mod contact_page;
mod submit_contact;

pub use contact_page::contact_page_handler;
pub use submit_contact::submit_contact_handler;
