pub mod app_state_builder;
pub mod auth_helper;
pub mod contact_test_fixtures;
pub mod interest_test_fixtures;
pub mod project_test_fixtures;
pub mod skill_test_fixtures;
pub mod stubs;
pub mod timeline_test_fixtures;
