pub mod project_catalog;
