use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::contact::application::domain::entities::{ContactInfo, ContactType};
use crate::modules::contact::application::ports::incoming::use_cases::{
    PatchContactError, PatchContactUseCase,
};
use crate::modules::contact::application::ports::outgoing::contact_repository::{
    ContactRepository, ContactRepositoryError, PatchContactData,
};
use crate::shared::content::validation::{self, ValidationError, MAX_TITLE_LEN};

pub struct PatchContactService<R>
where
    R: ContactRepository,
{
    contact_repository: R,
}

impl<R> PatchContactService<R>
where
    R: ContactRepository,
{
    pub fn new(contact_repository: R) -> Self {
        Self { contact_repository }
    }
}

fn validate(data: &PatchContactData) -> Result<(), ValidationError> {
    validation::not_null("type", &data.contact_type)?;
    validation::not_null("label", &data.label)?;
    validation::not_null("value", &data.value)?;
    validation::not_null("display_order", &data.display_order)?;
    validation::not_null("is_active", &data.is_active)?;

    if let Some(label) = data.label.as_value() {
        validation::required_text("label", label, MAX_TITLE_LEN)?;
    }
    if let Some(value) = data.value.as_value() {
        if value.trim().is_empty() {
            return Err(ValidationError::new("value", "cannot be empty"));
        }
    }
    validation::optional_url("url", data.url.as_value().map(String::as_str))?;
    Ok(())
}

#[async_trait]
impl<R> PatchContactUseCase for PatchContactService<R>
where
    R: ContactRepository + Send + Sync,
{
    async fn execute(
        &self,
        contact_id: Uuid,
        data: PatchContactData,
    ) -> Result<ContactInfo, PatchContactError> {
        validate(&data)?;

        // An email entry must keep a valid address. When the patch changes
        // only one of type/value the other half comes from the stored row.
        let resulting = match (data.contact_type.as_value(), data.value.as_value()) {
            (Some(contact_type), Some(value)) => Some((*contact_type, value.clone())),
            (None, None) => None,
            (contact_type, value) => {
                let current = self
                    .contact_repository
                    .find_by_id(contact_id)
                    .await
                    .map_err(map_repository_error)?;
                Some((
                    contact_type.copied().unwrap_or(current.contact_type),
                    value.cloned().unwrap_or(current.value),
                ))
            }
        };
        if let Some((ContactType::Email, value)) = resulting {
            validation::email("value", &value)?;
        }

        self.contact_repository
            .patch(contact_id, data)
            .await
            .map_err(map_repository_error)
    }
}

fn map_repository_error(e: ContactRepositoryError) -> PatchContactError {
    match e {
        ContactRepositoryError::NotFound => PatchContactError::NotFound,
        ContactRepositoryError::DatabaseError(msg)
        | ContactRepositoryError::SerializationError(msg) => PatchContactError::RepositoryError(msg),
    }
}
