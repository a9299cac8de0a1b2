mod seed_profile_source;

pub use seed_profile_source::SeedProfileSource;
