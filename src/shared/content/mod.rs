mod icon;
mod label;
mod patch;
mod slug;
mod sort;
pub mod validation;

pub use icon::Icon;
pub use label::UnknownLabel;
pub use patch::PatchField;
pub use slug::{normalize_slug, validate_slug, SlugError, MAX_SLUG_LEN};
pub use sort::{resolve_order, ListOrder, SortDirection};
pub use validation::ValidationError;
