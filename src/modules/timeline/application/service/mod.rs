mod create_timeline_entry_service;
mod delete_timeline_entry_service;
mod get_timeline_service;
mod patch_timeline_entry_service;

pub use create_timeline_entry_service::CreateTimelineEntryService;
pub use delete_timeline_entry_service::DeleteTimelineEntryService;
pub use get_timeline_service::GetTimelineService;
pub use patch_timeline_entry_service::PatchTimelineEntryService;
