pub mod api;
pub mod content;
pub mod filter_view;
