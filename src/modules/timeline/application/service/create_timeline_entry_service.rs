use async_trait::async_trait;

use crate::modules::timeline::application::domain::entities::TimelineEntry;
use crate::modules::timeline::application::ports::incoming::use_cases::{
    CreateTimelineEntryError, CreateTimelineEntryUseCase,
};
use crate::modules::timeline::application::ports::outgoing::timeline_repository::{
    CreateTimelineEntryData, TimelineRepository,
};
use crate::shared::content::validation::{self, ValidationError, MAX_TITLE_LEN};

pub struct CreateTimelineEntryService<R>
where
    R: TimelineRepository,
{
    timeline_repository: R,
}

impl<R> CreateTimelineEntryService<R>
where
    R: TimelineRepository,
{
    pub fn new(timeline_repository: R) -> Self {
        Self {
            timeline_repository,
        }
    }
}

fn validate(data: &CreateTimelineEntryData) -> Result<(), ValidationError> {
    validation::required_text("year", &data.year, MAX_TITLE_LEN)?;
    validation::required_text("title", &data.title, MAX_TITLE_LEN)?;

    if let Some(technologies) = &data.technologies {
        validation::non_blank_items("technologies", technologies)?;
    }
    if let Some(achievements) = &data.achievements {
        validation::non_blank_items("achievements", achievements)?;
    }
    Ok(())
}

#[async_trait]
impl<R> CreateTimelineEntryUseCase for CreateTimelineEntryService<R>
where
    R: TimelineRepository + Send + Sync,
{
    async fn execute(
        &self,
        data: CreateTimelineEntryData,
    ) -> Result<TimelineEntry, CreateTimelineEntryError> {
        validate(&data)?;

        self.timeline_repository
            .create(data)
            .await
            .map_err(|e| CreateTimelineEntryError::RepositoryError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;
    use uuid::Uuid;

    use crate::modules::timeline::application::ports::outgoing::timeline_repository::{
        PatchTimelineEntryData, TimelineRepositoryError,
    };
    use crate::tests::support::timeline_test_fixtures::{create_timeline_data, sample_entry};

    #[derive(Default)]
    struct CountingRepository {
        creates: Mutex<usize>,
    }

    #[async_trait]
    impl TimelineRepository for CountingRepository {
        async fn create(
            &self,
            data: CreateTimelineEntryData,
        ) -> Result<TimelineEntry, TimelineRepositoryError> {
            *self.creates.lock().unwrap() += 1;
            Ok(sample_entry(&data.title, data.entry_type, data.order_index))
        }

        async fn patch(
            &self,
            _entry_id: Uuid,
            _data: PatchTimelineEntryData,
        ) -> Result<TimelineEntry, TimelineRepositoryError> {
            unimplemented!()
        }

        async fn delete(&self, _entry_id: Uuid) -> Result<bool, TimelineRepositoryError> {
            unimplemented!()
        }
    }

    #[tokio::test]
    async fn creates_entry() {
        let repo = CountingRepository::default();
        let service = CreateTimelineEntryService::new(repo);

        let entry = service
            .execute(create_timeline_data("Lead Engineer"))
            .await
            .unwrap();

        assert_eq!(entry.title, "Lead Engineer");
        assert_eq!(*service.timeline_repository.creates.lock().unwrap(), 1);
    }

    #[tokio::test]
    async fn blank_achievement_is_rejected_before_storage() {
        let service = CreateTimelineEntryService::new(CountingRepository::default());
        let mut data = create_timeline_data("Lead Engineer");
        data.achievements = Some(vec!["Shipped v2".to_string(), " ".to_string()]);

        let err = service.execute(data).await.unwrap_err();

        assert!(matches!(err, CreateTimelineEntryError::Validation(e) if e.field == "achievements"));
        assert_eq!(*service.timeline_repository.creates.lock().unwrap(), 0);
    }

    #[tokio::test]
    async fn empty_year_is_rejected() {
        let service = CreateTimelineEntryService::new(CountingRepository::default());
        let mut data = create_timeline_data("Lead Engineer");
        data.year = String::new();

        assert!(matches!(
            service.execute(data).await,
            Err(CreateTimelineEntryError::Validation(_))
        ));
    }
}
