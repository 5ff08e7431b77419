use std::sync::Arc;

use crate::modules::contact::application::ports::incoming::use_cases::{
    CreateContactUseCase, DeleteContactUseCase, GetContactsUseCase, PatchContactUseCase,
};

#[derive(Clone)]
pub struct ContactUseCases {
    pub get_list: Arc<dyn GetContactsUseCase + Send + Sync>,
    pub create: Arc<dyn CreateContactUseCase + Send + Sync>,
    pub patch: Arc<dyn PatchContactUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteContactUseCase + Send + Sync>,
}
