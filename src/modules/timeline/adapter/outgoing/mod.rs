mod timeline_model_mapper;
mod timeline_query_postgres;
mod timeline_repository_postgres;
pub mod sea_orm_entity;

pub use timeline_query_postgres::TimelineQueryPostgres;
pub use timeline_repository_postgres::TimelineRepositoryPostgres;
