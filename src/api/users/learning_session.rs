use crate::api::ErrorResponse;
use crate::auth::AuthUser;
use crate::db::DbPool;
use crate::get_conn;
use crate::models::NewLearningDate;
use crate::schema::{learning_dates, users};
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use chrono::{Days, NaiveDate, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct LearningSessionRequest {
    /// Day the learning happened, format: YYYY-MM-DD. Defaults to today.
    pub date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct LearningSessionResponse {
    pub learned_on: NaiveDate,
    pub current_streak: i32,
    pub longest_streak: i32,
    pub last_learning_date: NaiveDate,
}

/// Advance the streak counters for a newly recorded learning day.
///
/// The day after the last learning date extends the streak, a repeat of an
/// already-recorded day changes nothing, a gap starts over at 1, and
/// backfilling an older day leaves the counters alone. The longest streak is
/// the running maximum of the current one.
pub(super) fn advance_streak(
    last_learning_date: Option<NaiveDate>,
    current_streak: i32,
    longest_streak: i32,
    learned_on: NaiveDate,
) -> (i32, i32) {
    let current = match last_learning_date {
        None => 1,
        Some(last) if learned_on == last => current_streak,
        Some(last) if Some(learned_on) == last.checked_add_days(Days::new(1)) => current_streak + 1,
        Some(last) if learned_on < last => current_streak,
        Some(_) => 1,
    };

    (current, longest_streak.max(current))
}

#[utoipa::path(
    post,
    path = "/api/users/me/learning-sessions",
    tag = "users",
    request_body = LearningSessionRequest,
    responses(
        (status = 200, description = "Learning day recorded, streaks updated", body = LearningSessionResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn record_learning_session(
    AuthUser(user): AuthUser,
    State(pool): State<Arc<DbPool>>,
    Json(request): Json<LearningSessionRequest>,
) -> impl IntoResponse {
    let learned_on = request.date.unwrap_or_else(|| Utc::now().date_naive());

    let (current_streak, longest_streak) = advance_streak(
        user.last_learning_date,
        user.current_streak,
        user.longest_streak,
        learned_on,
    );
    let last_learning_date = user.last_learning_date.map_or(learned_on, |d| d.max(learned_on));

    let mut conn = get_conn!(pool);

    let result: Result<(), diesel::result::Error> = conn.transaction(|conn| {
        // Recording the same day twice is a no-op thanks to the unique index
        diesel::insert_into(learning_dates::table)
            .values(NewLearningDate {
                user_id: user.id,
                learned_on,
            })
            .on_conflict((learning_dates::user_id, learning_dates::learned_on))
            .do_nothing()
            .execute(conn)?;

        diesel::update(users::table.find(user.id))
            .set((
                users::current_streak.eq(current_streak),
                users::longest_streak.eq(longest_streak),
                users::last_learning_date.eq(Some(last_learning_date)),
            ))
            .execute(conn)?;

        Ok(())
    });

    if let Err(e) = result {
        tracing::error!("Failed to record learning session: {}", e);
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: "Failed to record learning session".to_string(),
            }),
        )
            .into_response();
    }

    (
        StatusCode::OK,
        Json(LearningSessionResponse {
            learned_on,
            current_streak,
            longest_streak,
            last_learning_date,
        }),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_first_learning_day_starts_streak() {
        assert_eq!(advance_streak(None, 0, 0, d(2025, 3, 1)), (1, 1));
    }

    #[test]
    fn test_consecutive_day_extends_streak() {
        assert_eq!(
            advance_streak(Some(d(2025, 3, 1)), 3, 5, d(2025, 3, 2)),
            (4, 5)
        );
    }

    #[test]
    fn test_new_streak_can_become_longest() {
        assert_eq!(
            advance_streak(Some(d(2025, 3, 1)), 5, 5, d(2025, 3, 2)),
            (6, 6)
        );
    }

    #[test]
    fn test_same_day_is_idempotent() {
        assert_eq!(
            advance_streak(Some(d(2025, 3, 1)), 3, 5, d(2025, 3, 1)),
            (3, 5)
        );
    }

    #[test]
    fn test_gap_resets_streak() {
        assert_eq!(
            advance_streak(Some(d(2025, 3, 1)), 3, 5, d(2025, 3, 4)),
            (1, 5)
        );
    }

    #[test]
    fn test_backfill_keeps_counters() {
        assert_eq!(
            advance_streak(Some(d(2025, 3, 10)), 3, 5, d(2025, 3, 1)),
            (3, 5)
        );
    }

    #[test]
    fn test_extends_across_month_boundary() {
        assert_eq!(
            advance_streak(Some(d(2025, 2, 28)), 1, 1, d(2025, 3, 1)),
            (2, 2)
        );
    }
}
