mod get_timeline_service;

pub use get_timeline_service::GetTimelineService;
