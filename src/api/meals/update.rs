use super::{date_range_is_valid, MealResponse};
use crate::api::ErrorResponse;
use crate::auth::AuthUser;
use crate::db::DbPool;
use crate::get_conn;
use crate::models::Meal;
use crate::schema::meals;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::NaiveDate;
use diesel::prelude::*;
use serde::Deserialize;
use std::sync::Arc;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdateMealRequest {
    pub title: String,
    pub description: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

#[utoipa::path(
    put,
    path = "/api/meals/{id}",
    tag = "meals",
    params(
        ("id" = Uuid, Path, description = "Meal ID")
    ),
    request_body = UpdateMealRequest,
    responses(
        (status = 200, description = "Meal updated successfully", body = MealResponse),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Meal not found", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn update_meal(
    AuthUser(_user): AuthUser,
    State(pool): State<Arc<DbPool>>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateMealRequest>,
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

    let updated: Meal = match diesel::update(meals::table.find(id))
        .set((
            meals::title.eq(request.title.trim()),
            meals::description.eq(request.description.as_deref()),
            meals::start_date.eq(request.start_date),
            meals::end_date.eq(request.end_date),
        ))
        .returning(Meal::as_returning())
        .get_result(&mut conn)
    {
        Ok(m) => m,
        Err(diesel::NotFound) => {
            return (
                StatusCode::NOT_FOUND,
                Json(ErrorResponse {
                    error: "Meal not found".to_string(),
                }),
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!("Failed to update meal: {}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to update meal".to_string(),
                }),
            )
                .into_response();
        }
    };

    (StatusCode::OK, Json(MealResponse::from(updated))).into_response()
}
