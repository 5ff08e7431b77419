pub mod timeline_query;
pub mod timeline_repository;

pub use timeline_query::{
    default_timeline_order, TimelineOrder, TimelineQuery, TimelineQueryError, TimelineSortField,
};
pub use timeline_repository::{
    CreateTimelineEntryData, PatchTimelineEntryData, TimelineRepository, TimelineRepositoryError,
};
