use async_trait::async_trait;

use crate::modules::contact::application::domain::entities::{ContactInfo, ContactType};
use crate::modules::contact::application::ports::incoming::use_cases::{
    CreateContactError, CreateContactUseCase,
};
use crate::modules::contact::application::ports::outgoing::contact_repository::{
    ContactRepository, CreateContactData,
};
use crate::shared::content::validation::{self, ValidationError, MAX_TITLE_LEN};

pub struct CreateContactService<R>
where
    R: ContactRepository,
{
    contact_repository: R,
}

impl<R> CreateContactService<R>
where
    R: ContactRepository,
{
    pub fn new(contact_repository: R) -> Self {
        Self { contact_repository }
    }
}

fn validate(mut data: CreateContactData) -> Result<CreateContactData, ValidationError> {
    validation::required_text("label", &data.label, MAX_TITLE_LEN)?;
    if data.value.trim().is_empty() {
        return Err(ValidationError::new("value", "cannot be empty"));
    }
    if data.contact_type == ContactType::Email {
        validation::email("value", &data.value)?;
        data.value = data.value.trim().to_string();
    }
    validation::optional_url("url", data.url.as_deref())?;
    Ok(data)
}

#[async_trait]
impl<R> CreateContactUseCase for CreateContactService<R>
where
    R: ContactRepository + Send + Sync,
{
    async fn execute(&self, data: CreateContactData) -> Result<ContactInfo, CreateContactError> {
        let data = validate(data)?;

        self.contact_repository
            .create(data)
            .await
            .map_err(|e| CreateContactError::RepositoryError(e.to_string()))
    }
}
