pub mod get;
pub mod preferences;

pub use get::{GetUserError, GetUserQuery, GetUserResponse};
pub use preferences::{GetPreferencesError, GetPreferencesQuery, GetPreferencesResponse};
