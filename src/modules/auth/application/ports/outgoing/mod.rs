pub mod token_provider;
