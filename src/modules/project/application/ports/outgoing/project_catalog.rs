use async_trait::async_trait;

use crate::modules::project::domain::entities::Project;

//
// ──────────────────────────────────────────────────────────
// Outgoing Port
// ──────────────────────────────────────────────────────────
//

/// Source of the project list. The production implementation serves
/// the in-code seed; the port exists so views and services stay
/// ignorant of where the list comes from.
#[async_trait]
pub trait ProjectCatalog: Send + Sync {
    /// Full project list in authored order.
    async fn all(&self) -> Vec<Project>;
}
