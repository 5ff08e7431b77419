use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::timeline::application::domain::entities::TimelineEntry;
use crate::modules::timeline::application::ports::incoming::use_cases::{
    PatchTimelineEntryError, PatchTimelineEntryUseCase,
};
use crate::modules::timeline::application::ports::outgoing::timeline_repository::{
    PatchTimelineEntryData, TimelineRepository, TimelineRepositoryError,
};
use crate::shared::content::validation::{self, ValidationError, MAX_TITLE_LEN};

pub struct PatchTimelineEntryService<R>
where
    R: TimelineRepository,
{
    timeline_repository: R,
}

impl<R> PatchTimelineEntryService<R>
where
    R: TimelineRepository,
{
    pub fn new(timeline_repository: R) -> Self {
        Self {
            timeline_repository,
        }
    }
}

fn validate(data: &PatchTimelineEntryData) -> Result<(), ValidationError> {
    validation::not_null("year", &data.year)?;
    validation::not_null("title", &data.title)?;
    validation::not_null("type", &data.entry_type)?;
    validation::not_null("description", &data.description)?;
    validation::not_null("location", &data.location)?;
    validation::not_null("order_index", &data.order_index)?;

    if let Some(year) = data.year.as_value() {
        validation::required_text("year", year, MAX_TITLE_LEN)?;
    }
    if let Some(title) = data.title.as_value() {
        validation::required_text("title", title, MAX_TITLE_LEN)?;
    }
    if let Some(technologies) = data.technologies.as_value() {
        validation::non_blank_items("technologies", technologies)?;
    }
    if let Some(achievements) = data.achievements.as_value() {
        validation::non_blank_items("achievements", achievements)?;
    }
    Ok(())
}

#[async_trait]
impl<R> PatchTimelineEntryUseCase for PatchTimelineEntryService<R>
where
    R: TimelineRepository + Send + Sync,
{
    async fn execute(
        &self,
        entry_id: Uuid,
        data: PatchTimelineEntryData,
    ) -> Result<TimelineEntry, PatchTimelineEntryError> {
        validate(&data)?;

        self.timeline_repository
            .patch(entry_id, data)
            .await
            .map_err(|e| match e {
                TimelineRepositoryError::NotFound => PatchTimelineEntryError::NotFound,
                TimelineRepositoryError::DatabaseError(msg)
                | TimelineRepositoryError::SerializationError(msg) => {
                    PatchTimelineEntryError::RepositoryError(msg)
                }
            })
    }
}
