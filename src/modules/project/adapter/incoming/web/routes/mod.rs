mod projects_page;

pub use projects_page::projects_page_handler;
