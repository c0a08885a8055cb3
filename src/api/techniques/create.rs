use super::{DifficultyLevel, TechniqueResponse};
use crate::api::ErrorResponse;
use crate::auth::AuthUser;
use crate::db::DbPool;
use crate::get_conn;
use crate::models::{NewTechnique, Technique};
use crate::schema::techniques;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use diesel::prelude::*;
use serde::Deserialize;
use std::sync::Arc;
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateTechniqueRequest {
    pub title: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub difficulty_level: DifficultyLevel,
    pub tags: Option<String>,
}

#[utoipa::path(
    post,
    path = "/api/techniques",
    tag = "techniques",
    request_body = CreateTechniqueRequest,
    responses(
        (status = 201, description = "Technique created successfully", body = TechniqueResponse),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn create_technique(
    AuthUser(_user): AuthUser,
    State(pool): State<Arc<DbPool>>,
    Json(request): Json<CreateTechniqueRequest>,
) -> impl IntoResponse {
    if request.title.trim().is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "Title cannot be empty".to_string(),
            }),
        )
            .into_response();
    }

    let mut conn = get_conn!(pool);

    let new_technique = NewTechnique {
        title: request.title.trim(),
        description: request.description.as_deref(),
        image_url: request.image_url.as_deref(),
        difficulty_level: request.difficulty_level.as_str(),
        tags: request.tags.as_deref(),
    };

    let technique: Technique = match diesel::insert_into(techniques::table)
        .values(&new_technique)
        .returning(Technique::as_returning())
        .get_result(&mut conn)
    {
        Ok(t) => t,
        Err(e) => {
            tracing::error!("Failed to create technique: {}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to create technique".to_string(),
                }),
            )
                .into_response();
        }
    };

    (
        StatusCode::CREATED,
        Json(TechniqueResponse::from_model(technique)),
    )
        .into_response()
}
