mod create_interest;
mod delete_interest;
mod get_interest_by_slug;
mod get_interests;
mod patch_interest;

pub use create_interest::{CreateInterestError, CreateInterestUseCase};
pub use delete_interest::{DeleteInterestError, DeleteInterestUseCase};
pub use get_interest_by_slug::{GetInterestBySlugError, GetInterestBySlugUseCase};
pub use get_interests::{GetInterestsError, GetInterestsUseCase};
pub use patch_interest::{PatchInterestError, PatchInterestUseCase};
