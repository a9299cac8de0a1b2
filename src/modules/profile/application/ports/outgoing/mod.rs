pub mod profile_source;
