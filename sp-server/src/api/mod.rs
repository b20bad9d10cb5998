pub mod account;
pub mod admin;
pub mod delete_response;
pub mod error;
pub mod extractors;
pub mod predictions;
pub mod roles;
pub mod users;
