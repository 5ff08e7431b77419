mod interest_model_mapper;
mod interest_query_postgres;
mod interest_repository_postgres;
pub mod sea_orm_entity;

pub use interest_query_postgres::InterestQueryPostgres;
pub use interest_repository_postgres::InterestRepositoryPostgres;
