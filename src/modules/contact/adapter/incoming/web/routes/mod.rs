mod create_contact;
mod delete_contact;
mod get_contacts;
mod patch_contact;

pub use create_contact::*;
pub use delete_contact::*;
pub use get_contacts::*;
pub use patch_contact::*;
