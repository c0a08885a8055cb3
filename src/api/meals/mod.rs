pub mod create;
pub mod delete;
pub mod list;
pub mod update;

use crate::models::Meal;
use crate::AppState;
use axum::routing::{get, put};
use axum::Router;
use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use utoipa::{OpenApi, ToSchema};
use uuid::Uuid;

/// Returns the router for /api/meals endpoints (mounted at /api/meals)
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list::list_meals).post(create::create_meal))
        .route("/{id}", put(update::update_meal).delete(delete::delete_meal))
}

/// Both dates are inclusive; a single-day meal has start_date == end_date.
pub(super) fn date_range_is_valid(start_date: NaiveDate, end_date: NaiveDate) -> bool {
    end_date >= start_date
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct MealResponse {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Meal> for MealResponse {
    fn from(meal: Meal) -> Self {
        MealResponse {
            id: meal.id,
            title: meal.title,
            description: meal.description,
            start_date: meal.start_date,
            end_date: meal.end_date,
            created_at: meal.created_at,
            updated_at: meal.updated_at,
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        create::create_meal,
        list::list_meals,
        update::update_meal,
        delete::delete_meal,
    ),
    components(schemas(
        MealResponse,
        create::CreateMealRequest,
        list::ListMealsResponse,
        update::UpdateMealRequest,
    ))
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_date_range_single_day_is_valid() {
        assert!(date_range_is_valid(d(2025, 3, 1), d(2025, 3, 1)));
    }

    #[test]
    fn test_date_range_forward_is_valid() {
        assert!(date_range_is_valid(d(2025, 3, 1), d(2025, 3, 7)));
    }

    #[test]
    fn test_date_range_backwards_is_invalid() {
        assert!(!date_range_is_valid(d(2025, 3, 7), d(2025, 3, 1)));
    }
}
