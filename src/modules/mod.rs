pub mod auth;
pub mod blog;
pub mod contact;
pub mod interest;
pub mod pages;
pub mod project;
pub mod skill;
pub mod timeline;
