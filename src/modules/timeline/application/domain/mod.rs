pub mod entities;

pub use entities::{TimelineEntry, TimelineEntryType};
