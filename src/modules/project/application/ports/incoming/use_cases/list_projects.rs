use async_trait::async_trait;

use crate::modules::project::domain::entities::Project;
use crate::modules::project::domain::filter::ProjectFilter;

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

/// Lists the projects matching `filter`, in authored order. The list
/// is fixed configuration data, so there is no failure mode.
#[async_trait]
pub trait ListProjectsUseCase: Send + Sync {
    async fn execute(&self, filter: ProjectFilter) -> Vec<Project>;
}
