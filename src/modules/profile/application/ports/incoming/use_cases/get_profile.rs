use async_trait::async_trait;

use crate::modules::profile::domain::entities::Profile;

/// Returns the seeded profile for rendering. Configuration data, so
/// there is no failure mode.
#[async_trait]
pub trait GetProfileUseCase: Send + Sync {
    async fn execute(&self) -> Profile;
}
