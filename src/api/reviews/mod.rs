pub mod create;
pub mod delete;
pub mod list;
pub mod update;

use crate::models::Review;
use crate::AppState;
use axum::routing::{get, put};
use axum::Router;
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::{OpenApi, ToSchema};
use uuid::Uuid;

/// Ratings are whole stars, 1 through 5.
pub const MIN_RATING: i32 = 1;
pub const MAX_RATING: i32 = 5;

pub(super) fn rating_in_bounds(rating: i32) -> bool {
    (MIN_RATING..=MAX_RATING).contains(&rating)
}

/// Returns the router for /api/reviews endpoints (mounted at /api/reviews)
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list::list_reviews).post(create::create_review))
        .route(
            "/{id}",
            put(update::update_review).delete(delete::delete_review),
        )
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ReviewResponse {
    pub id: Uuid,
    pub recipe_id: Uuid,
    pub name: String,
    pub comment: String,
    pub rating: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Review> for ReviewResponse {
    fn from(review: Review) -> Self {
        ReviewResponse {
            id: review.id,
            recipe_id: review.recipe_id,
            name: review.name,
            comment: review.comment,
            rating: review.rating,
            created_at: review.created_at,
            updated_at: review.updated_at,
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        create::create_review,
        list::list_reviews,
        update::update_review,
        delete::delete_review,
    ),
    components(schemas(
        ReviewResponse,
        create::CreateReviewRequest,
        list::ListReviewsResponse,
        update::UpdateReviewRequest,
    ))
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_bounds() {
        assert!(!rating_in_bounds(0));
        assert!(rating_in_bounds(1));
        assert!(rating_in_bounds(5));
        assert!(!rating_in_bounds(6));
        assert!(!rating_in_bounds(-3));
    }
}
