mod create_contact;
mod delete_contact;
mod get_contacts;
mod patch_contact;

pub use create_contact::{CreateContactError, CreateContactUseCase};
pub use delete_contact::{DeleteContactError, DeleteContactUseCase};
pub use get_contacts::{GetContactsError, GetContactsUseCase};
pub use patch_contact::{PatchContactError, PatchContactUseCase};
