mod create_timeline_entry;
mod delete_timeline_entry;
mod get_timeline;
mod patch_timeline_entry;

pub use create_timeline_entry::*;
pub use delete_timeline_entry::*;
pub use get_timeline::*;
pub use patch_timeline_entry::*;
