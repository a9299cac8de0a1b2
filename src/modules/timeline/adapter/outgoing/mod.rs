mod seed_timeline;

pub use seed_timeline::SeedTimeline;
