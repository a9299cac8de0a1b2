use crate::modules::profile::adapter::outgoing::SeedProfileSource;
use crate::modules::profile::domain::entities::Profile;

/// The seeded profile, as a fixture. Tests that assert on rendered
/// profile content compare against this.
pub fn seed_profile_fixture() -> Profile {
    SeedProfileSource::profile()
}
