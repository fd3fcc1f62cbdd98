//! User API routes
//!
//! - `POST /api/v1/users` - Register (account + default preferences)
//! - `POST /api/v1/users/login` - Verify credentials
//! - `GET /api/v1/users/:user_id` - Profile
//! - `GET /api/v1/users/:user_id/preferences` - Dietary preferences
//! - `PUT /api/v1/users/:user_id/preferences` - Replace dietary preferences
//!
//! No session or token machinery; login only verifies a credential pair.

use crate::api::response::{ApiResponse, ErrorResponse};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post, put},
    Json, Router,
};
use sqlx::PgPool;
use uuid::Uuid;

use super::commands::{
    LoginCommand, LoginError, RegisterUserCommand, RegisterUserError, UpdatePreferencesCommand,
    UpdatePreferencesError,
};
use super::queries::{GetPreferencesError, GetPreferencesQuery, GetUserError, GetUserQuery};
use crate::AppState;

pub fn users_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(register_user))
        .route("/login", post(login))
        .route("/:user_id", get(get_user))
        .route("/:user_id/preferences", get(get_preferences))
        .route("/:user_id/preferences", put(update_preferences))
}

#[tracing::instrument(skip(pool, command), fields(username = %command.username))]
async fn register_user(
    State(pool): State<PgPool>,
    Json(command): Json<RegisterUserCommand>,
) -> Result<Response, UserApiError> {
    let response = super::commands::register::handle(pool, command).await?;

    tracing::info!(user_id = %response.id, "User registered via API");

    Ok((StatusCode::CREATED, Json(ApiResponse::success(response))).into_response())
}

#[tracing::instrument(skip(pool, command), fields(username = %command.username))]
async fn login(
    State(pool): State<PgPool>,
    Json(command): Json<LoginCommand>,
) -> Result<Response, UserApiError> {
    let response = super::commands::login::handle(pool, command).await?;
    Ok((StatusCode::OK, Json(ApiResponse::success(response))).into_response())
}

#[tracing::instrument(skip(pool), fields(user_id = %id))]
async fn get_user(
    State(pool): State<PgPool>,
    Path(id): Path<Uuid>,
) -> Result<Response, UserApiError> {
    let response = super::queries::get::handle(pool, GetUserQuery { id }).await?;
    Ok((StatusCode::OK, Json(ApiResponse::success(response))).into_response())
}

#[tracing::instrument(skip(pool), fields(user_id = %id))]
async fn get_preferences(
    State(pool): State<PgPool>,
    Path(id): Path<Uuid>,
) -> Result<Response, UserApiError> {
    let response =
        super::queries::preferences::handle(pool, GetPreferencesQuery { user_id: id }).await?;
    Ok((StatusCode::OK, Json(ApiResponse::success(response))).into_response())
}

#[tracing::instrument(skip(pool, command), fields(user_id = %id))]
async fn update_preferences(
    State(pool): State<PgPool>,
    Path(id): Path<Uuid>,
    Json(mut command): Json<UpdatePreferencesCommand>,
) -> Result<Response, UserApiError> {
    command.user_id = id;

    let response = super::commands::update_preferences::handle(pool, command).await?;

    Ok((StatusCode::OK, Json(ApiResponse::success(response))).into_response())
}

/// Unified error type for user API endpoints
#[derive(Debug)]
enum UserApiError {
    Register(RegisterUserError),
    Login(LoginError),
    Get(GetUserError),
    GetPreferences(GetPreferencesError),
    UpdatePreferences(UpdatePreferencesError),
}

impl From<RegisterUserError> for UserApiError {
    fn from(err: RegisterUserError) -> Self {
        Self::Register(err)
    }
}

impl From<LoginError> for UserApiError {
    fn from(err: LoginError) -> Self {
        Self::Login(err)
    }
}

impl From<GetUserError> for UserApiError {
    fn from(err: GetUserError) -> Self {
        Self::Get(err)
    }
}

impl From<GetPreferencesError> for UserApiError {
    fn from(err: GetPreferencesError) -> Self {
        Self::GetPreferences(err)
    }
}

impl From<UpdatePreferencesError> for UserApiError {
    fn from(err: UpdatePreferencesError) -> Self {
        Self::UpdatePreferences(err)
    }
}

impl IntoResponse for UserApiError {
    fn into_response(self) -> Response {
        match self {
            UserApiError::Register(RegisterUserError::Username(_))
            | UserApiError::Register(RegisterUserError::Email(_))
            | UserApiError::Register(RegisterUserError::PasswordTooShort) => {
                let error = ErrorResponse::new("VALIDATION_ERROR", self.to_string());
                (StatusCode::BAD_REQUEST, Json(error)).into_response()
            },

            UserApiError::Register(RegisterUserError::Duplicate) => {
                let error = ErrorResponse::new("CONFLICT", self.to_string());
                (StatusCode::CONFLICT, Json(error)).into_response()
            },

            UserApiError::Login(LoginError::InvalidCredentials) => {
                let error = ErrorResponse::new("INVALID_CREDENTIALS", self.to_string());
                (StatusCode::UNAUTHORIZED, Json(error)).into_response()
            },

            UserApiError::Get(GetUserError::NotFound(_))
            | UserApiError::GetPreferences(GetPreferencesError::NotFound(_))
            | UserApiError::UpdatePreferences(UpdatePreferencesError::UserNotFound(_)) => {
                let error = ErrorResponse::new("NOT_FOUND", self.to_string());
                (StatusCode::NOT_FOUND, Json(error)).into_response()
            },

            UserApiError::Register(RegisterUserError::Hash(_))
            | UserApiError::Login(LoginError::Hash(_)) => {
                tracing::error!("Password hashing error: {}", self);
                let error = ErrorResponse::new("INTERNAL_ERROR", "An internal error occurred");
                (StatusCode::INTERNAL_SERVER_ERROR, Json(error)).into_response()
            },

            UserApiError::Register(RegisterUserError::Database(_))
            | UserApiError::Login(LoginError::Database(_))
            | UserApiError::Get(GetUserError::Database(_))
            | UserApiError::GetPreferences(GetPreferencesError::Database(_))
            | UserApiError::UpdatePreferences(UpdatePreferencesError::Database(_)) => {
                tracing::error!("Database error in user endpoint: {}", self);
                let error = ErrorResponse::new("INTERNAL_ERROR", "A database error occurred");
                (StatusCode::INTERNAL_SERVER_ERROR, Json(error)).into_response()
            },
        }
    }
}

impl std::fmt::Display for UserApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Register(e) => write!(f, "{}", e),
            Self::Login(e) => write!(f, "{}", e),
            Self::Get(e) => write!(f, "{}", e),
            Self::GetPreferences(e) => write!(f, "{}", e),
            Self::UpdatePreferences(e) => write!(f, "{}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routes_structure() {
        let router = users_routes();
        assert!(format!("{:?}", router).contains("Router"));
    }

    #[test]
    fn error_display() {
        let err = UserApiError::Login(LoginError::InvalidCredentials);
        assert!(err.to_string().contains("Invalid username or password"));
    }
}
