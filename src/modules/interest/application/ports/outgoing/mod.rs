pub mod interest_query;
pub mod interest_repository;

pub use interest_query::{
    default_interest_order, InterestListFilter, InterestOrder, InterestQuery, InterestQueryError,
    InterestSortField,
};
pub use interest_repository::{
    CreateInterestData, InterestRepository, InterestRepositoryError, PatchInterestData,
};
