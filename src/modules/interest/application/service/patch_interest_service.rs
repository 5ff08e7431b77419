use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::interest::application::domain::entities::Interest;
use crate::modules::interest::application::ports::incoming::use_cases::{
    PatchInterestError, PatchInterestUseCase,
};
use crate::modules::interest::application::ports::outgoing::interest_repository::{
    InterestRepository, InterestRepositoryError, PatchInterestData,
};
use crate::shared::content::validation::{self, ValidationError, MAX_TITLE_LEN};

pub struct PatchInterestService<R>
where
    R: InterestRepository,
{
    interest_repository: R,
}

impl<R> PatchInterestService<R>
where
    R: InterestRepository,
{
    pub fn new(interest_repository: R) -> Self {
        Self {
            interest_repository,
        }
    }
}

fn validate(data: &PatchInterestData) -> Result<(), ValidationError> {
    validation::not_null("title", &data.title)?;
    validation::not_null("excerpt", &data.excerpt)?;
    validation::not_null("category", &data.category)?;
    validation::not_null("type", &data.interest_type)?;
    validation::not_null("icon", &data.icon)?;
    validation::not_null("color", &data.color)?;
    validation::not_null("tags", &data.tags)?;
    validation::not_null("featured", &data.featured)?;

    if let Some(title) = data.title.as_value() {
        validation::required_text("title", title, MAX_TITLE_LEN)?;
    }
    if let Some(tags) = data.tags.as_value() {
        validation::non_blank_items("tags", tags)?;
    }
    Ok(())
}

#[async_trait]
impl<R> PatchInterestUseCase for PatchInterestService<R>
where
    R: InterestRepository + Send + Sync,
{
    async fn execute(
        &self,
        interest_id: Uuid,
        data: PatchInterestData,
    ) -> Result<Interest, PatchInterestError> {
        validate(&data)?;

        self.interest_repository
            .patch(interest_id, data)
            .await
            .map_err(|e| match e {
                InterestRepositoryError::NotFound => PatchInterestError::NotFound,
                InterestRepositoryError::DatabaseError(msg)
                | InterestRepositoryError::SerializationError(msg) => {
                    PatchInterestError::RepositoryError(msg)
                }
                InterestRepositoryError::SlugAlreadyExists => PatchInterestError::RepositoryError(
                    "unexpected slug conflict while patching interest".to_string(),
                ),
            })
    }
}
