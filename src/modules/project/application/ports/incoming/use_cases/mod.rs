mod list_projects;

pub use list_projects::ListProjectsUseCase;
