use async_trait::async_trait;

use crate::modules::project::application::ports::incoming::use_cases::ListProjectsUseCase;
use crate::modules::project::application::ports::outgoing::project_catalog::ProjectCatalog;
use crate::modules::project::domain::entities::Project;
use crate::modules::project::domain::filter::{filter_projects, ProjectFilter};

// ============================================================================
// Service Implementation
// ============================================================================

pub struct ListProjectsService<C>
where
    C: ProjectCatalog,
{
    catalog: C,
}

impl<C> ListProjectsService<C>
where
    C: ProjectCatalog,
{
    pub fn new(catalog: C) -> Self {
        Self { catalog }
    }
}

#[async_trait]
impl<C> ListProjectsUseCase for ListProjectsService<C>
where
    C: ProjectCatalog + Send + Sync,
{
    async fn execute(&self, filter: ProjectFilter) -> Vec<Project> {
        let projects = self.catalog.all().await;
        filter_projects(filter, &projects)
    }
}
