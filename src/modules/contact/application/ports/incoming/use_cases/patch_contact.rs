use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::contact::application::domain::entities::ContactInfo;
use crate::modules::contact::application::ports::outgoing::contact_repository::PatchContactData;
use crate::shared::content::ValidationError;

#[derive(Debug, Clone, thiserror::Error)]
pub enum PatchContactError {
    #[error("Invalid patch: {0}")]
    Validation(#[from] ValidationError),

    #[error("Contact info not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait PatchContactUseCase: Send + Sync {
    async fn execute(
        &self,
        contact_id: Uuid,
        data: PatchContactData,
    ) -> Result<ContactInfo, PatchContactError>;
}
