use async_trait::async_trait;

use crate::modules::contact::application::domain::entities::ContactInfo;
use crate::modules::contact::application::ports::outgoing::contact_query::{
    ContactListFilter, ContactOrder,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetContactsError {
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait GetContactsUseCase: Send + Sync {
    async fn execute(
        &self,
        filter: ContactListFilter,
        order: ContactOrder,
    ) -> Result<Vec<ContactInfo>, GetContactsError>;
}
