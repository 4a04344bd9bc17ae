//! Challenge API endpoints

pub mod types;

use std::sync::Arc;

use axum::extract::State;
use axum::routing::{get, put};
use axum::{Json, Router};

use crate::api::auth::Identity;
use crate::api::extractors::{ChallengePath, ValidatedJson};
use crate::api::types::ApiError;
use crate::data::SqliteService;
use crate::data::sqlite::repositories::{challenge, progress, rating};

use types::{
    ChallengeDto, ChallengeRatingResponse, CreateChallengeRequest, MarkSolvedRequest, ProgressDto,
    RateChallengeRequest, RatingResponse, UserRatingResponse,
};

/// Shared state for challenge API endpoints
#[derive(Clone)]
pub struct ChallengesApiState {
    pub database: Arc<SqliteService>,
}

/// Build challenge API routes
pub fn routes(database: Arc<SqliteService>) -> Router<()> {
    let state = ChallengesApiState { database };

    Router::new()
        .route("/", get(list_challenges).post(create_challenge))
        .route(
            "/{challenge_id}/rating",
            get(get_challenge_rating).put(rate_challenge),
        )
        .route("/{challenge_id}/rating/me", get(get_user_rating))
        .route("/{challenge_id}/progress", put(mark_solved))
        .with_state(state)
}

/// Look up a challenge or return 404
async fn require_challenge(
    state: &ChallengesApiState,
    challenge_id: &str,
) -> Result<(), ApiError> {
    challenge::get_challenge(state.database.pool(), challenge_id)
        .await
        .map_err(ApiError::from_sqlite)?
        .map(|_| ())
        .ok_or_else(|| ApiError::not_found("CHALLENGE_NOT_FOUND", "Challenge not found"))
}

/// Create a new challenge
#[utoipa::path(
    post,
    path = "/api/v1/challenges",
    tag = "challenges",
    request_body = CreateChallengeRequest,
    responses(
        (status = 200, description = "Challenge created", body = ChallengeDto),
        (status = 400, description = "Validation failed"),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn create_challenge(
    State(state): State<ChallengesApiState>,
    identity: Identity,
    ValidatedJson(body): ValidatedJson<CreateChallengeRequest>,
) -> Result<Json<ChallengeDto>, ApiError> {
    let row = challenge::create_challenge(
        state.database.pool(),
        &body.title,
        &body.description,
        body.difficulty,
        &body.tags,
        body.link.as_deref(),
        &identity.subject,
    )
    .await
    .map_err(ApiError::from_sqlite)?;

    Ok(Json(ChallengeDto::from(row)))
}

/// List all challenges, newest first
#[utoipa::path(
    get,
    path = "/api/v1/challenges",
    tag = "challenges",
    responses(
        (status = 200, description = "All challenges", body = [ChallengeDto])
    )
)]
pub async fn list_challenges(
    State(state): State<ChallengesApiState>,
) -> Result<Json<Vec<ChallengeDto>>, ApiError> {
    let rows = challenge::list_challenges(state.database.pool())
        .await
        .map_err(ApiError::from_sqlite)?;

    Ok(Json(rows.into_iter().map(ChallengeDto::from).collect()))
}

/// Aggregate rating for a challenge
#[utoipa::path(
    get,
    path = "/api/v1/challenges/{challenge_id}/rating",
    tag = "ratings",
    params(("challenge_id" = String, Path, description = "Challenge ID")),
    responses(
        (status = 200, description = "Average rating and vote count", body = ChallengeRatingResponse),
        (status = 404, description = "Challenge not found")
    )
)]
pub async fn get_challenge_rating(
    State(state): State<ChallengesApiState>,
    path: ChallengePath,
) -> Result<Json<ChallengeRatingResponse>, ApiError> {
    require_challenge(&state, &path.challenge_id).await?;

    let agg = rating::get_challenge_rating(state.database.pool(), &path.challenge_id)
        .await
        .map_err(ApiError::from_sqlite)?;

    Ok(Json(ChallengeRatingResponse {
        average: agg.average,
        total: agg.total,
        user_rating: None,
    }))
}

/// The caller's own rating for a challenge
#[utoipa::path(
    get,
    path = "/api/v1/challenges/{challenge_id}/rating/me",
    tag = "ratings",
    params(("challenge_id" = String, Path, description = "Challenge ID")),
    responses(
        (status = 200, description = "The caller's rating, null when unrated", body = UserRatingResponse),
        (status = 401, description = "Not authenticated"),
        (status = 404, description = "Challenge not found")
    )
)]
pub async fn get_user_rating(
    State(state): State<ChallengesApiState>,
    identity: Identity,
    path: ChallengePath,
) -> Result<Json<UserRatingResponse>, ApiError> {
    require_challenge(&state, &path.challenge_id).await?;

    let rating =
        rating::get_user_rating(state.database.pool(), &path.challenge_id, &identity.subject)
            .await
            .map_err(ApiError::from_sqlite)?;

    Ok(Json(UserRatingResponse { rating }))
}

/// Rate a challenge (1-5 stars, replaces any previous rating)
#[utoipa::path(
    put,
    path = "/api/v1/challenges/{challenge_id}/rating",
    tag = "ratings",
    params(("challenge_id" = String, Path, description = "Challenge ID")),
    request_body = RateChallengeRequest,
    responses(
        (status = 200, description = "Rating stored", body = RatingResponse),
        (status = 400, description = "Rating outside 1-5 or not an integer"),
        (status = 401, description = "Not authenticated"),
        (status = 404, description = "Challenge not found")
    )
)]
pub async fn rate_challenge(
    State(state): State<ChallengesApiState>,
    identity: Identity,
    path: ChallengePath,
    ValidatedJson(body): ValidatedJson<RateChallengeRequest>,
) -> Result<Json<RatingResponse>, ApiError> {
    require_challenge(&state, &path.challenge_id).await?;

    let row = rating::rate_challenge(
        state.database.pool(),
        &path.challenge_id,
        &identity.subject,
        body.rating,
    )
    .await
    .map_err(ApiError::from_sqlite)?;

    Ok(Json(RatingResponse {
        rating: row.rating,
        rated_at: row.rated_at,
    }))
}

/// Mark a challenge solved or unsolved for the caller
#[utoipa::path(
    put,
    path = "/api/v1/challenges/{challenge_id}/progress",
    tag = "progress",
    params(("challenge_id" = String, Path, description = "Challenge ID")),
    request_body = MarkSolvedRequest,
    responses(
        (status = 200, description = "Progress stored", body = ProgressDto),
        (status = 401, description = "Not authenticated"),
        (status = 404, description = "Challenge not found")
    )
)]
pub async fn mark_solved(
    State(state): State<ChallengesApiState>,
    identity: Identity,
    path: ChallengePath,
    ValidatedJson(body): ValidatedJson<MarkSolvedRequest>,
) -> Result<Json<ProgressDto>, ApiError> {
    require_challenge(&state, &path.challenge_id).await?;

    let row = progress::mark_solved(
        state.database.pool(),
        &identity.subject,
        &path.challenge_id,
        body.solved,
    )
    .await
    .map_err(ApiError::from_sqlite)?;

    Ok(Json(ProgressDto::from(row)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::Extension;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use tower::ServiceExt;

    use crate::api::auth::AuthSettings;

    async fn test_router() -> Router {
        let pool = sqlx::SqlitePool::connect(":memory:").await.unwrap();
        sqlx::query(crate::data::sqlite::schema::SCHEMA)
            .execute(&pool)
            .await
            .unwrap();
        let database = Arc::new(SqliteService::from_pool(pool));

        Router::new()
            .nest("/api/v1/challenges", routes(database))
            .layer(Extension(AuthSettings::disabled()))
    }

    fn json_request(method: &str, uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_create_then_list() {
        let router = test_router().await;

        let response = router
            .clone()
            .oneshot(json_request(
                "POST",
                "/api/v1/challenges",
                r#"{"title": "Two Sum", "description": "d", "difficulty": "easy", "tags": ["arrays"]}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let created = body_json(response).await;
        assert_eq!(created["title"], "Two Sum");
        assert_eq!(created["created_by"], "local");

        let response = router
            .oneshot(Request::get("/api/v1/challenges").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let listed = body_json(response).await;
        assert_eq!(listed.as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_out_of_range_rating_rejected_before_write() {
        let router = test_router().await;

        let response = router
            .clone()
            .oneshot(json_request(
                "POST",
                "/api/v1/challenges",
                r#"{"title": "T", "description": "d", "difficulty": "medium"}"#,
            ))
            .await
            .unwrap();
        let id = body_json(response).await["id"].as_str().unwrap().to_string();

        // Prior rating
        let response = router
            .clone()
            .oneshot(json_request(
                "PUT",
                &format!("/api/v1/challenges/{id}/rating"),
                r#"{"rating": 4}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        // Out of range rejected
        let response = router
            .clone()
            .oneshot(json_request(
                "PUT",
                &format!("/api/v1/challenges/{id}/rating"),
                r#"{"rating": 6}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        // Prior rating left intact
        let response = router
            .oneshot(
                Request::get(format!("/api/v1/challenges/{id}/rating/me"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let json = body_json(response).await;
        assert_eq!(json["rating"], 4);
    }

    #[tokio::test]
    async fn test_rating_unknown_challenge_404() {
        let router = test_router().await;

        let response = router
            .oneshot(json_request(
                "PUT",
                "/api/v1/challenges/nope/rating",
                r#"{"rating": 3}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_aggregate_rating_empty() {
        let router = test_router().await;

        let response = router
            .clone()
            .oneshot(json_request(
                "POST",
                "/api/v1/challenges",
                r#"{"title": "T", "description": "d", "difficulty": "hard"}"#,
            ))
            .await
            .unwrap();
        let id = body_json(response).await["id"].as_str().unwrap().to_string();

        let response = router
            .oneshot(
                Request::get(format!("/api/v1/challenges/{id}/rating"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["average"], 0.0);
        assert_eq!(json["total"], 0);
        assert_eq!(json["user_rating"], serde_json::Value::Null);
    }

    #[tokio::test]
    async fn test_mark_solved_round_trip() {
        let router = test_router().await;

        let response = router
            .clone()
            .oneshot(json_request(
                "POST",
                "/api/v1/challenges",
                r#"{"title": "T", "description": "d", "difficulty": "easy"}"#,
            ))
            .await
            .unwrap();
        let id = body_json(response).await["id"].as_str().unwrap().to_string();

        let response = router
            .oneshot(json_request(
                "PUT",
                &format!("/api/v1/challenges/{id}/progress"),
                r#"{"solved": true}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["solved"], true);
        assert!(json["solved_at"].is_i64());
    }
}
