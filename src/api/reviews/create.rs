use super::{rating_in_bounds, ReviewResponse, MAX_RATING, MIN_RATING};
use crate::api::ErrorResponse;
use crate::auth::AuthUser;
use crate::db::DbPool;
use crate::get_conn;
use crate::models::{NewReview, Review};
use crate::schema::{recipes, reviews};
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use diesel::prelude::*;
use serde::Deserialize;
use std::sync::Arc;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateReviewRequest {
    pub recipe_id: Uuid,
    pub name: String,
    pub comment: String,
    pub rating: i32,
}

enum CreateError {
    RecipeNotFound,
    Db(diesel::result::Error),
}

impl From<diesel::result::Error> for CreateError {
    fn from(e: diesel::result::Error) -> Self {
        CreateError::Db(e)
    }
}

#[utoipa::path(
    post,
    path = "/api/reviews",
    tag = "reviews",
    request_body = CreateReviewRequest,
    responses(
        (status = 201, description = "Review created successfully", body = ReviewResponse),
        (status = 400, description = "Invalid request (recipe not found or rating out of range)", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn create_review(
    AuthUser(_user): AuthUser,
    State(pool): State<Arc<DbPool>>,
    Json(request): Json<CreateReviewRequest>,
) -> impl IntoResponse {
    if request.name.trim().is_empty() || request.comment.trim().is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "Name and comment cannot be empty".to_string(),
            }),
        )
            .into_response();
    }

    if !rating_in_bounds(request.rating) {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: format!("Rating must be between {} and {}", MIN_RATING, MAX_RATING),
            }),
        )
            .into_response();
    }

    let mut conn = get_conn!(pool);

    // The recipe lookup and the review insert run atomically, so the review
    // can never land on a recipe deleted in between
    let result: Result<Review, CreateError> = conn.transaction(|conn| {
        let recipe_exists: Option<Uuid> = recipes::table
            .find(request.recipe_id)
            .select(recipes::id)
            .first(conn)
            .optional()?;

        if recipe_exists.is_none() {
            return Err(CreateError::RecipeNotFound);
        }

        let new_review = NewReview {
            recipe_id: request.recipe_id,
            name: request.name.trim(),
            comment: &request.comment,
            rating: request.rating,
        };

        let review = diesel::insert_into(reviews::table)
            .values(&new_review)
            .returning(Review::as_returning())
            .get_result(conn)?;

        Ok(review)
    });

    match result {
        Ok(review) => (StatusCode::CREATED, Json(ReviewResponse::from(review))).into_response(),
        Err(CreateError::RecipeNotFound) => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: format!("Recipe not found with id: {}", request.recipe_id),
            }),
        )
            .into_response(),
        Err(CreateError::Db(e)) => {
            tracing::error!("Failed to create review: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to create review".to_string(),
                }),
            )
                .into_response()
        }
    }
}
