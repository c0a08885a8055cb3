use super::{rating_in_bounds, ReviewResponse, MAX_RATING, MIN_RATING};
use crate::api::ErrorResponse;
use crate::auth::AuthUser;
use crate::db::DbPool;
use crate::get_conn;
use crate::models::Review;
use crate::schema::reviews;
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

/// Full-object update; the recipe binding is immutable.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdateReviewRequest {
    pub name: String,
    pub comment: String,
    pub rating: i32,
}

#[utoipa::path(
    put,
    path = "/api/reviews/{id}",
    tag = "reviews",
    params(
        ("id" = Uuid, Path, description = "Review ID")
    ),
    request_body = UpdateReviewRequest,
    responses(
        (status = 200, description = "Review updated successfully", body = ReviewResponse),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Review not found", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn update_review(
    AuthUser(_user): AuthUser,
    State(pool): State<Arc<DbPool>>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateReviewRequest>,
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

    let updated: Review = match diesel::update(reviews::table.find(id))
        .set((
            reviews::name.eq(request.name.trim()),
            reviews::comment.eq(&request.comment),
            reviews::rating.eq(request.rating),
        ))
        .returning(Review::as_returning())
        .get_result(&mut conn)
    {
        Ok(r) => r,
        Err(diesel::NotFound) => {
            return (
                StatusCode::NOT_FOUND,
                Json(ErrorResponse {
                    error: "Review not found".to_string(),
                }),
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!("Failed to update review: {}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to update review".to_string(),
                }),
            )
                .into_response();
        }
    };

    (StatusCode::OK, Json(ReviewResponse::from(updated))).into_response()
}
