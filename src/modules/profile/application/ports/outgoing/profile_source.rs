use async_trait::async_trait;

use crate::modules::profile::domain::entities::Profile;

//
// ──────────────────────────────────────────────────────────
// Outgoing Port
// ──────────────────────────────────────────────────────────
//

/// Source of the seeded profile. Always returns the authored defaults;
/// edits never flow back through this port.
#[async_trait]
pub trait ProfileSource: Send + Sync {
    async fn profile(&self) -> Profile;
}
