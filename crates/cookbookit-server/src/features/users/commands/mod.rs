pub mod login;
pub mod register;
pub mod update_preferences;

pub use login::{LoginCommand, LoginError, LoginResponse};
pub use register::{RegisterUserCommand, RegisterUserError, RegisterUserResponse};
pub use update_preferences::{
    UpdatePreferencesCommand, UpdatePreferencesError, UpdatePreferencesResponse,
};
