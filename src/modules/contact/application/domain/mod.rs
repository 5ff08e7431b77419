pub mod entities;

pub use entities::{ContactInfo, ContactType};
