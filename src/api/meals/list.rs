use super::MealResponse;
use crate::api::ErrorResponse;
use crate::auth::AuthUser;
use crate::db::DbPool;
use crate::get_conn;
use crate::models::Meal;
use crate::schema::meals;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use diesel::prelude::*;
use serde::Serialize;
use std::sync::Arc;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ListMealsResponse {
    pub meals: Vec<MealResponse>,
}

#[utoipa::path(
    get,
    path = "/api/meals",
    tag = "meals",
    responses(
        (status = 200, description = "List of all meals ordered by start date", body = ListMealsResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn list_meals(
    AuthUser(_user): AuthUser,
    State(pool): State<Arc<DbPool>>,
) -> impl IntoResponse {
    let mut conn = get_conn!(pool);

    let results: Vec<Meal> = match meals::table
        .order(meals::start_date.asc())
        .select(Meal::as_select())
        .load(&mut conn)
    {
        Ok(m) => m,
        Err(e) => {
            tracing::error!("Failed to fetch meals: {}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to fetch meals".to_string(),
                }),
            )
                .into_response();
        }
    };

    let meals = results.into_iter().map(MealResponse::from).collect();

    (StatusCode::OK, Json(ListMealsResponse { meals })).into_response()
}
