mod timeline_page;

pub use timeline_page::timeline_page_handler;
