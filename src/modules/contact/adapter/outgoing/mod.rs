mod contact_model_mapper;
mod contact_query_postgres;
mod contact_repository_postgres;
pub mod sea_orm_entity;

pub use contact_query_postgres::ContactQueryPostgres;
pub use contact_repository_postgres::ContactRepositoryPostgres;
