pub mod contact_query;
pub mod contact_repository;

pub use contact_query::{
    default_contact_order, ContactListFilter, ContactOrder, ContactQuery, ContactQueryError,
    ContactSortField,
};
pub use contact_repository::{
    ContactRepository, ContactRepositoryError, CreateContactData, PatchContactData,
};
