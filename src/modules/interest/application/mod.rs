pub mod domain;
pub mod interest_use_cases;
pub mod ports;
pub mod service;
