//! OpenAPI specification and Swagger UI

use axum::http::header;
use axum::response::{Html, IntoResponse, Json};
use utoipa::OpenApi;

use crate::api::routes::{challenges, health, users};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "CodeFun API",
        version = env!("CARGO_PKG_VERSION"),
        description = "Store and review coding exercises"
    ),
    tags(
        (name = "health", description = "Health check endpoint"),
        (name = "challenges", description = "Challenge catalogue"),
        (name = "ratings", description = "Challenge ratings"),
        (name = "progress", description = "Per-user solved state"),
        (name = "users", description = "User provisioning and profile")
    ),
    paths(
        health::health,
        challenges::create_challenge,
        challenges::list_challenges,
        challenges::get_challenge_rating,
        challenges::get_user_rating,
        challenges::rate_challenge,
        challenges::mark_solved,
        users::sync_user,
        users::get_current_user,
        users::get_user_progress,
    ),
    components(schemas(
        crate::data::types::Difficulty,
        challenges::types::CreateChallengeRequest,
        challenges::types::ChallengeDto,
        challenges::types::RateChallengeRequest,
        challenges::types::RatingResponse,
        challenges::types::ChallengeRatingResponse,
        challenges::types::UserRatingResponse,
        challenges::types::MarkSolvedRequest,
        challenges::types::ProgressDto,
        users::types::SyncUserRequest,
        users::types::SyncUserResponse,
        users::types::UserDto,
    ))
)]
struct ApiDoc;

/// Serve the OpenAPI spec as JSON
pub async fn openapi_json() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/json")],
        Json(ApiDoc::openapi()),
    )
}

/// Serve Swagger UI from CDN
pub async fn swagger_ui_html() -> Html<&'static str> {
    Html(SWAGGER_UI_HTML)
}

const SWAGGER_UI_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>CodeFun API Documentation</title>
    <link rel="stylesheet" type="text/css" href="https://unpkg.com/swagger-ui-dist@5/swagger-ui.css">
    <style>
        html { box-sizing: border-box; overflow-y: scroll; }
        *, *:before, *:after { box-sizing: inherit; }
        body { margin: 0; background: #fafafa; }
    </style>
</head>
<body>
    <div id="swagger-ui"></div>
    <script src="https://unpkg.com/swagger-ui-dist@5/swagger-ui-bundle.js"></script>
    <script src="https://unpkg.com/swagger-ui-dist@5/swagger-ui-standalone-preset.js"></script>
    <script>
        window.onload = () => {
            window.ui = SwaggerUIBundle({
                url: "/api/openapi.json",
                dom_id: '#swagger-ui',
                presets: [
                    SwaggerUIBundle.presets.apis,
                    SwaggerUIStandalonePreset
                ],
                layout: "StandaloneLayout",
            });
        };
    </script>
</body>
</html>"#;
