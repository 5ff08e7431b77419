mod static_blog_catalog;

pub use static_blog_catalog::{CatalogError, StaticBlogCatalog};
