//! User directory routes

use axum::{
    Json, Router,
    extract::{Query, State},
    response::IntoResponse,
    routing::{get, post, put},
};
use serde_json::json;

use crate::{
    error::ApiError,
    models::{CreateUserRequest, UserQuery},
    state::AppState,
};

/// Name written by the update route, regardless of request content.
const UPDATED_NAME: &str = "new name";

/// Create the router for the user directory service
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(hello))
        .route("/health", get(health_check))
        .route("/user", post(create_user))
        .route("/user", get(get_user))
        .route("/user", put(update_user))
        .with_state(state)
}

/// Static greeting at the service root
pub async fn hello() -> &'static str {
    "Hello"
}

/// Health check endpoint, reporting database reachability
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let database = common::database::health_check(&state.db_pool).await.is_ok();
    let status = if database { "ok" } else { "degraded" };

    Json(json!({
        "status": status,
        "service": "user-api",
        "database": database,
    }))
}

/// Create a new user
pub async fn create_user(
    State(state): State<AppState>,
    Json(payload): Json<CreateUserRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let user = state.user_repository.create(&payload).await.map_err(|e| {
        tracing::error!("Failed to create user: {}", e);
        ApiError::Database(e.to_string())
    })?;

    Ok(Json(user))
}

/// Get the first user matching an email
///
/// Responds with JSON `null` when no user matches; absence is not an error.
pub async fn get_user(
    State(state): State<AppState>,
    Query(query): Query<UserQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let user = state
        .user_repository
        .find_by_email(&query.email)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get user: {}", e);
            ApiError::Database(e.to_string())
        })?;

    Ok(Json(user))
}

/// Overwrite the name of the first user matching an email
///
/// The new name is always the fixed literal; any request body is ignored.
/// A lookup miss is a 404, never a silent success.
pub async fn update_user(
    State(state): State<AppState>,
    Query(query): Query<UserQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let mut user = state
        .user_repository
        .find_by_email(&query.email)
        .await
        .map_err(|e| {
            tracing::error!("Failed to look up user for update: {}", e);
            ApiError::Database(e.to_string())
        })?
        .ok_or_else(|| ApiError::NotFound(format!("no user with email {}", query.email)))?;

    user.name = UPDATED_NAME.to_string();

    let user = state.user_repository.save(&user).await.map_err(|e| {
        tracing::error!("Failed to save user: {}", e);
        ApiError::Database(e.to_string())
    })?;

    Ok(Json(user))
}
