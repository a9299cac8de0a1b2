mod seed_catalog;

pub use seed_catalog::SeedProjectCatalog;
