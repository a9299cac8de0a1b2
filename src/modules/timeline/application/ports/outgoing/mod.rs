pub mod timeline_source;
