use super::ReviewResponse;
use crate::api::ErrorResponse;
use crate::auth::AuthUser;
use crate::db::DbPool;
use crate::get_conn;
use crate::models::Review;
use crate::schema::reviews;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

#[derive(Debug, Deserialize, IntoParams)]
pub struct ListReviewsParams {
    /// Only return reviews for this recipe
    pub recipe_id: Option<Uuid>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ListReviewsResponse {
    pub reviews: Vec<ReviewResponse>,
}

#[utoipa::path(
    get,
    path = "/api/reviews",
    tag = "reviews",
    params(ListReviewsParams),
    responses(
        (status = 200, description = "List of reviews, newest first", body = ListReviewsResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn list_reviews(
    AuthUser(_user): AuthUser,
    State(pool): State<Arc<DbPool>>,
    Query(params): Query<ListReviewsParams>,
) -> impl IntoResponse {
    let mut conn = get_conn!(pool);

    let mut query = reviews::table.into_boxed();

    if let Some(recipe_id) = params.recipe_id {
        query = query.filter(reviews::recipe_id.eq(recipe_id));
    }

    let results: Vec<Review> = match query
        .order(reviews::created_at.desc())
        .select(Review::as_select())
        .load(&mut conn)
    {
        Ok(r) => r,
        Err(e) => {
            tracing::error!("Failed to fetch reviews: {}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to fetch reviews".to_string(),
                }),
            )
                .into_response();
        }
    };

    let reviews = results.into_iter().map(ReviewResponse::from).collect();

    (StatusCode::OK, Json(ListReviewsResponse { reviews })).into_response()
}
