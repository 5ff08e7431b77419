use std::sync::Arc;

use crate::modules::timeline::application::ports::incoming::use_cases::{
    CreateTimelineEntryUseCase, DeleteTimelineEntryUseCase, GetTimelineUseCase,
    PatchTimelineEntryUseCase,
};

#[derive(Clone)]
pub struct TimelineUseCases {
    pub get_list: Arc<dyn GetTimelineUseCase + Send + Sync>,
    pub create: Arc<dyn CreateTimelineEntryUseCase + Send + Sync>,
    pub patch: Arc<dyn PatchTimelineEntryUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteTimelineEntryUseCase + Send + Sync>,
}
