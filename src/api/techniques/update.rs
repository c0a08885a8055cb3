use super::{DifficultyLevel, TechniqueResponse};
use crate::api::ErrorResponse;
use crate::auth::AuthUser;
use crate::db::DbPool;
use crate::get_conn;
use crate::models::Technique;
use crate::schema::techniques;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use diesel::prelude::*;
use serde::Deserialize;
use std::sync::Arc;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdateTechniqueRequest {
    pub title: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub difficulty_level: DifficultyLevel,
    pub tags: Option<String>,
}

#[utoipa::path(
    put,
    path = "/api/techniques/{id}",
    tag = "techniques",
    params(
        ("id" = Uuid, Path, description = "Technique ID")
    ),
    request_body = UpdateTechniqueRequest,
    responses(
        (status = 200, description = "Technique updated successfully", body = TechniqueResponse),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Technique not found", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn update_technique(
    AuthUser(_user): AuthUser,
    State(pool): State<Arc<DbPool>>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateTechniqueRequest>,
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

    let updated: Technique = match diesel::update(techniques::table.find(id))
        .set((
            techniques::title.eq(request.title.trim()),
            techniques::description.eq(request.description.as_deref()),
            techniques::image_url.eq(request.image_url.as_deref()),
            techniques::difficulty_level.eq(request.difficulty_level.as_str()),
            techniques::tags.eq(request.tags.as_deref()),
        ))
        .returning(Technique::as_returning())
        .get_result(&mut conn)
    {
        Ok(t) => t,
        Err(diesel::NotFound) => {
            return (
                StatusCode::NOT_FOUND,
                Json(ErrorResponse {
                    error: "Technique not found".to_string(),
                }),
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!("Failed to update technique: {}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to update technique".to_string(),
                }),
            )
                .into_response();
        }
    };

    (StatusCode::OK, Json(TechniqueResponse::from_model(updated))).into_response()
}
