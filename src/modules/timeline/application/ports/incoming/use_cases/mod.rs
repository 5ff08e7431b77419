mod create_timeline_entry;
mod delete_timeline_entry;
mod get_timeline;
mod patch_timeline_entry;

pub use create_timeline_entry::{CreateTimelineEntryError, CreateTimelineEntryUseCase};
pub use delete_timeline_entry::{DeleteTimelineEntryError, DeleteTimelineEntryUseCase};
pub use get_timeline::{GetTimelineError, GetTimelineUseCase};
pub use patch_timeline_entry::{PatchTimelineEntryError, PatchTimelineEntryUseCase};
