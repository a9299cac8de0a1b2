mod skills_page;

pub use skills_page::skills_page_handler;
