mod get_timeline;

pub use get_timeline::GetTimelineUseCase;
