use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::contact::application::ports::incoming::use_cases::{
    DeleteContactError, DeleteContactUseCase,
};
use crate::modules::contact::application::ports::outgoing::contact_repository::ContactRepository;

pub struct DeleteContactService<R>
where
    R: ContactRepository,
{
    contact_repository: R,
}

impl<R> DeleteContactService<R>
where
    R: ContactRepository,
{
    pub fn new(contact_repository: R) -> Self {
        Self { contact_repository }
    }
}

#[async_trait]
impl<R> DeleteContactUseCase for DeleteContactService<R>
where
    R: ContactRepository + Send + Sync,
{
    async fn execute(&self, contact_id: Uuid) -> Result<bool, DeleteContactError> {
        self.contact_repository
            .delete(contact_id)
            .await
            .map_err(|e| DeleteContactError::RepositoryError(e.to_string()))
    }
}
