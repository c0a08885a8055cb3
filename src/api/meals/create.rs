use super::{date_range_is_valid, MealResponse};
use crate::api::ErrorResponse;
use crate::auth::AuthUser;
use crate::db::DbPool;
use crate::get_conn;
use crate::models::{Meal, NewMeal};
use crate::schema::meals;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use chrono::NaiveDate;
use diesel::prelude::*;
use serde::Deserialize;
use std::sync::Arc;
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateMealRequest {
    pub title: String,
    pub description: Option<String>,
    /// First day of the plan (inclusive), format: YYYY-MM-DD
    pub start_date: NaiveDate,
    /// Last day of the plan (inclusive), format: YYYY-MM-DD
    pub end_date: NaiveDate,
}

#[utoipa::path(
    post,
    path = "/api/meals",
    tag = "meals",
    request_body = CreateMealRequest,
    responses(
        (status = 201, description = "Meal created successfully", body = MealResponse),
        (status = 400, description = "Invalid request (empty title or backwards date range)", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn create_meal(
    AuthUser(_user): AuthUser,
    State(pool): State<Arc<DbPool>>,
    Json(request): Json<CreateMealRequest>,
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

    if !date_range_is_valid(request.start_date, request.end_date) {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "End date cannot be before start date".to_string(),
            }),
        )
            .into_response();
    }

    let mut conn = get_conn!(pool);

    let new_meal = NewMeal {
        title: request.title.trim(),
        description: request.description.as_deref(),
        start_date: request.start_date,
        end_date: request.end_date,
    };

    let meal: Meal = match diesel::insert_into(meals::table)
        .values(&new_meal)
        .returning(Meal::as_returning())
        .get_result(&mut conn)
    {
        Ok(m) => m,
        Err(e) => {
            tracing::error!("Failed to create meal: {}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to create meal".to_string(),
                }),
            )
                .into_response();
        }
    };

    (StatusCode::CREATED, Json(MealResponse::from(meal))).into_response()
}
