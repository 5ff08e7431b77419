pub mod domain;
pub mod ports;
pub mod service;
pub mod timeline_use_cases;
