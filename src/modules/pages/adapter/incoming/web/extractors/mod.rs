pub mod render_context;
