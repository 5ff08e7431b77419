use async_trait::async_trait;

use crate::modules::interest::application::domain::entities::Interest;
use crate::modules::interest::application::ports::incoming::use_cases::{
    CreateInterestError, CreateInterestUseCase,
};
use crate::modules::interest::application::ports::outgoing::interest_repository::{
    CreateInterestData, InterestRepository, InterestRepositoryError,
};
use crate::shared::content::validation::{self, ValidationError, MAX_TITLE_LEN};

pub struct CreateInterestService<R>
where
    R: InterestRepository,
{
    interest_repository: R,
}

impl<R> CreateInterestService<R>
where
    R: InterestRepository,
{
    pub fn new(interest_repository: R) -> Self {
        Self {
            interest_repository,
        }
    }
}

fn validate(mut data: CreateInterestData) -> Result<CreateInterestData, ValidationError> {
    data.slug = validation::slug("slug", &data.slug)?;
    validation::required_text("title", &data.title, MAX_TITLE_LEN)?;
    validation::non_blank_items("tags", &data.tags)?;
    Ok(data)
}

#[async_trait]
impl<R> CreateInterestUseCase for CreateInterestService<R>
where
    R: InterestRepository + Send + Sync,
{
    async fn execute(&self, data: CreateInterestData) -> Result<Interest, CreateInterestError> {
        let data = validate(data)?;

        self.interest_repository
            .create(data)
            .await
            .map_err(|e| match e {
                InterestRepositoryError::SlugAlreadyExists => {
                    CreateInterestError::SlugAlreadyExists
                }
                InterestRepositoryError::DatabaseError(msg)
                | InterestRepositoryError::SerializationError(msg) => {
                    CreateInterestError::RepositoryError(msg)
                }
                InterestRepositoryError::NotFound => CreateInterestError::RepositoryError(
                    "unexpected not found while creating interest".to_string(),
                ),
            })
    }
}
