pub mod error;
pub mod repositories;

pub use error::{DbError, Result};
pub use repositories::prediction_repository::PredictionRepository;
pub use repositories::role_repository::RoleRepository;
pub use repositories::user_repository::UserRepository;

#[cfg(test)]
mod tests;
