use async_trait::async_trait;

use crate::modules::contact::application::domain::entities::ContactInfo;
use crate::modules::contact::application::ports::incoming::use_cases::{
    GetContactsError, GetContactsUseCase,
};
use crate::modules::contact::application::ports::outgoing::contact_query::{
    ContactListFilter, ContactOrder, ContactQuery,
};

pub struct GetContactsService<Q>
where
    Q: ContactQuery,
{
    query: Q,
}

impl<Q> GetContactsService<Q>
where
    Q: ContactQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetContactsUseCase for GetContactsService<Q>
where
    Q: ContactQuery + Send + Sync,
{
    async fn execute(
        &self,
        filter: ContactListFilter,
        order: ContactOrder,
    ) -> Result<Vec<ContactInfo>, GetContactsError> {
        self.query
            .list(filter, order)
            .await
            .map_err(|e| GetContactsError::QueryFailed(e.to_string()))
    }
}
