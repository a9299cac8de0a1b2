mod list_projects_service;

pub use list_projects_service::ListProjectsService;
