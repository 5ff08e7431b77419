mod create_interest_service;
mod delete_interest_service;
mod get_interest_by_slug_service;
mod get_interests_service;
mod patch_interest_service;

pub use create_interest_service::CreateInterestService;
pub use delete_interest_service::DeleteInterestService;
pub use get_interest_by_slug_service::GetInterestBySlugService;
pub use get_interests_service::GetInterestsService;
pub use patch_interest_service::PatchInterestService;
