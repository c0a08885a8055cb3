use super::RecipeResponse;
use crate::api::ErrorResponse;
use crate::auth::AuthUser;
use crate::db::DbPool;
use crate::get_conn;
use crate::models::Recipe;
use crate::schema::recipes;
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

/// Full-object update. Rating and image_urls keep their stored values when
/// omitted; everything else is replaced.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdateRecipeRequest {
    pub title: String,
    pub description: Option<String>,
    pub ingredients: Vec<String>,
    pub steps: Vec<String>,
    pub category: Option<String>,
    pub rating: Option<f64>,
    pub image_urls: Option<Vec<String>>,
}

#[utoipa::path(
    put,
    path = "/api/recipes/{id}",
    tag = "recipes",
    params(
        ("id" = Uuid, Path, description = "Recipe ID")
    ),
    request_body = UpdateRecipeRequest,
    responses(
        (status = 200, description = "Recipe updated successfully", body = RecipeResponse),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Recipe not found", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn update_recipe(
    AuthUser(_user): AuthUser,
    State(pool): State<Arc<DbPool>>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateRecipeRequest>,
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

    // Read-modify-write; concurrent updates to the same row last-write-win
    let current: Recipe = match recipes::table
        .find(id)
        .select(Recipe::as_select())
        .first(&mut conn)
    {
        Ok(r) => r,
        Err(diesel::NotFound) => {
            return (
                StatusCode::NOT_FOUND,
                Json(ErrorResponse {
                    error: "Recipe not found".to_string(),
                }),
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!("Failed to fetch recipe: {}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to fetch recipe".to_string(),
                }),
            )
                .into_response();
        }
    };

    let ingredients: Vec<Option<String>> = request.ingredients.into_iter().map(Some).collect();
    let steps: Vec<Option<String>> = request.steps.into_iter().map(Some).collect();
    let rating = request.rating.or(current.rating);
    let image_urls: Vec<Option<String>> = request
        .image_urls
        .map(|urls| urls.into_iter().map(Some).collect())
        .unwrap_or(current.image_urls);

    let updated: Recipe = match diesel::update(recipes::table.find(id))
        .set((
            recipes::title.eq(&request.title),
            recipes::description.eq(request.description.as_deref()),
            recipes::ingredients.eq(&ingredients),
            recipes::steps.eq(&steps),
            recipes::category.eq(request.category.as_deref()),
            recipes::rating.eq(rating),
            recipes::image_urls.eq(&image_urls),
        ))
        .returning(Recipe::as_returning())
        .get_result(&mut conn)
    {
        Ok(r) => r,
        Err(e) => {
            tracing::error!("Failed to update recipe: {}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to update recipe".to_string(),
                }),
            )
                .into_response();
        }
    };

    (StatusCode::OK, Json(RecipeResponse::from(updated))).into_response()
}
