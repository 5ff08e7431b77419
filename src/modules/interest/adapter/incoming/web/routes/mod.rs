mod create_interest;
mod delete_interest;
mod get_interest_by_slug;
mod get_interests;
mod patch_interest;

pub use create_interest::*;
pub use delete_interest::*;
pub use get_interest_by_slug::*;
pub use get_interests::*;
pub use patch_interest::*;
