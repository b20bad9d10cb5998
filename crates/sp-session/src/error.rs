use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SessionError {
    /// The backing store could not be read or written. Not handled by the
    /// session layer; callers let it surface to the generic fault path.
    #[error("Session store unavailable: {message} {location}")]
    Unavailable {
        message: String,
        location: ErrorLocation,
    },
}

pub type Result<T> = std::result::Result<T, SessionError>;
