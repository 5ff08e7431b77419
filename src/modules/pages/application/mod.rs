pub mod page_composer;
pub mod page_props;
pub mod render_context;
