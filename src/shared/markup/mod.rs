pub mod escape;
pub mod extractor_config;
pub mod layout;
pub mod page;
pub mod response;
pub mod widgets;

pub use escape::escape_html;
pub use layout::render_layout;
pub use page::Page;
pub use response::PageResponse;
