//! User API endpoints

pub mod types;

use std::sync::Arc;

use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};

use crate::api::auth::MaybeIdentity;
use crate::api::extractors::{SubjectPath, ValidatedJson};
use crate::api::routes::challenges::types::ProgressDto;
use crate::api::types::ApiError;
use crate::data::SqliteService;
use crate::data::sqlite::repositories::{progress, user};

use types::{SyncUserRequest, SyncUserResponse, UserDto};

/// Shared state for user API endpoints
#[derive(Clone)]
pub struct UsersApiState {
    pub database: Arc<SqliteService>,
}

/// Build user API routes
pub fn routes(database: Arc<SqliteService>) -> Router<()> {
    let state = UsersApiState { database };

    Router::new()
        .route("/sync", post(sync_user))
        .route("/me", get(get_current_user))
        .route("/{subject}/progress", get(get_user_progress))
        .with_state(state)
}

/// Provision or refresh a user from the identity provider
#[utoipa::path(
    post,
    path = "/api/v1/users/sync",
    tag = "users",
    request_body = SyncUserRequest,
    responses(
        (status = 200, description = "User created or updated", body = SyncUserResponse),
        (status = 400, description = "Validation failed")
    )
)]
pub async fn sync_user(
    State(state): State<UsersApiState>,
    ValidatedJson(body): ValidatedJson<SyncUserRequest>,
) -> Result<Json<SyncUserResponse>, ApiError> {
    let row = user::sync_user(
        state.database.pool(),
        &body.subject,
        &body.email,
        body.first_name.as_deref(),
        body.last_name.as_deref(),
        body.image_url.as_deref(),
    )
    .await
    .map_err(ApiError::from_sqlite)?;

    Ok(Json(SyncUserResponse { id: row.id }))
}

/// The caller's user row, or null without a session or before sync
#[utoipa::path(
    get,
    path = "/api/v1/users/me",
    tag = "users",
    responses(
        (status = 200, description = "Current user or null", body = Option<UserDto>)
    )
)]
pub async fn get_current_user(
    State(state): State<UsersApiState>,
    MaybeIdentity(identity): MaybeIdentity,
) -> Result<Json<Option<UserDto>>, ApiError> {
    let Some(identity) = identity else {
        return Ok(Json(None));
    };

    let row = user::get_by_subject(state.database.pool(), &identity.subject)
        .await
        .map_err(ApiError::from_sqlite)?;

    Ok(Json(row.map(UserDto::from)))
}

/// All progress rows for a user
#[utoipa::path(
    get,
    path = "/api/v1/users/{subject}/progress",
    tag = "progress",
    params(("subject" = String, Path, description = "Identity subject")),
    responses(
        (status = 200, description = "Progress rows, empty for unknown users", body = [ProgressDto])
    )
)]
pub async fn get_user_progress(
    State(state): State<UsersApiState>,
    path: SubjectPath,
) -> Result<Json<Vec<ProgressDto>>, ApiError> {
    let rows = progress::get_user_progress(state.database.pool(), &path.subject)
        .await
        .map_err(ApiError::from_sqlite)?;

    Ok(Json(rows.into_iter().map(ProgressDto::from).collect()))
}
