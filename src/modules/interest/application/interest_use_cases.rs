use std::sync::Arc;

use crate::modules::interest::application::ports::incoming::use_cases::{
    CreateInterestUseCase, DeleteInterestUseCase, GetInterestBySlugUseCase, GetInterestsUseCase,
    PatchInterestUseCase,
};

#[derive(Clone)]
pub struct InterestUseCases {
    pub get_list: Arc<dyn GetInterestsUseCase + Send + Sync>,
    pub get_by_slug: Arc<dyn GetInterestBySlugUseCase + Send + Sync>,
    pub create: Arc<dyn CreateInterestUseCase + Send + Sync>,
    pub patch: Arc<dyn PatchInterestUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteInterestUseCase + Send + Sync>,
}
