pub mod prediction_repository;
pub mod role_repository;
pub mod user_repository;
