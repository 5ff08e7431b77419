mod about_page;
mod blog_pages;
mod contact_page;
mod home_page;
mod interest_pages;
mod page_support;
mod project_pages;

pub use about_page::*;
pub use blog_pages::*;
pub use contact_page::*;
pub use home_page::*;
pub use interest_pages::*;
pub use page_support::ListingQuery;
pub use project_pages::*;
