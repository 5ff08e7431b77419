pub mod entities;

pub use entities::{Interest, InterestCategory, InterestType};
