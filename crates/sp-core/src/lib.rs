pub mod forecast;
pub mod models;

pub use forecast::Forecast;
pub use models::identity::UserIdentity;
pub use models::prediction::Prediction;
pub use models::role::Role;
pub use models::user::User;
