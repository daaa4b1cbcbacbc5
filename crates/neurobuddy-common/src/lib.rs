pub mod errors;
pub mod id;

pub use errors::{ConfigError, NeuroBuddyError};
pub use id::{correlation_id, SessionId};

pub type Result<T> = std::result::Result<T, NeuroBuddyError>;
