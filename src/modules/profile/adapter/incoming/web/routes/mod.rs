mod home_page;
mod settings_page;
mod submit_settings;

pub use home_page::home_page_handler;
pub use settings_page::settings_page_handler;
pub use submit_settings::submit_settings_handler;
