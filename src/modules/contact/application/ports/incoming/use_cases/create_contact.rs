use async_trait::async_trait;

use crate::modules::contact::application::domain::entities::ContactInfo;
use crate::modules::contact::application::ports::outgoing::contact_repository::CreateContactData;
use crate::shared::content::ValidationError;

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateContactError {
    #[error("Invalid contact info: {0}")]
    Validation(#[from] ValidationError),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CreateContactUseCase: Send + Sync {
    async fn execute(&self, data: CreateContactData) -> Result<ContactInfo, CreateContactError>;
}
