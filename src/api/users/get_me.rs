use super::full_name;
use crate::api::ErrorResponse;
use crate::auth::AuthUser;
use crate::db::DbPool;
use crate::get_conn;
use crate::models::User;
use crate::schema::user_follows;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use chrono::{DateTime, NaiveDate, Utc};
use diesel::prelude::*;
use serde::Serialize;
use std::sync::Arc;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct UserProfileResponse {
    pub id: Uuid,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub full_name: String,
    pub username: String,
    pub email: String,
    pub role: String,
    pub bio: Option<String>,
    pub profile_picture_url: Option<String>,
    pub skills: Vec<String>,
    pub current_streak: i32,
    pub longest_streak: i32,
    pub last_learning_date: Option<NaiveDate>,
    pub follower_count: i64,
    pub following_count: i64,
    pub created_at: DateTime<Utc>,
}

impl UserProfileResponse {
    pub(super) fn from_user(user: User, follower_count: i64, following_count: i64) -> Self {
        let full_name = full_name(
            user.first_name.as_deref(),
            user.last_name.as_deref(),
            &user.username,
        );
        UserProfileResponse {
            id: user.id,
            first_name: user.first_name,
            last_name: user.last_name,
            full_name,
            username: user.username,
            email: user.email,
            role: user.role,
            bio: user.bio,
            profile_picture_url: user.profile_picture_url,
            skills: user.skills.into_iter().flatten().collect(),
            current_streak: user.current_streak,
            longest_streak: user.longest_streak,
            last_learning_date: user.last_learning_date,
            follower_count,
            following_count,
            created_at: user.created_at,
        }
    }
}

pub(super) fn load_follow_counts(
    conn: &mut PgConnection,
    user_id: Uuid,
) -> Result<(i64, i64), diesel::result::Error> {
    let follower_count: i64 = user_follows::table
        .filter(user_follows::followed_id.eq(user_id))
        .count()
        .get_result(conn)?;

    let following_count: i64 = user_follows::table
        .filter(user_follows::follower_id.eq(user_id))
        .count()
        .get_result(conn)?;

    Ok((follower_count, following_count))
}

#[utoipa::path(
    get,
    path = "/api/users/me",
    tag = "users",
    responses(
        (status = 200, description = "Authenticated user's profile", body = UserProfileResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn get_me(
    AuthUser(user): AuthUser,
    State(pool): State<Arc<DbPool>>,
) -> impl IntoResponse {
    let mut conn = get_conn!(pool);

    let (follower_count, following_count) = match load_follow_counts(&mut conn, user.id) {
        Ok(counts) => counts,
        Err(e) => {
            tracing::error!("Failed to count follows: {}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to fetch profile".to_string(),
                }),
            )
                .into_response();
        }
    };

    (
        StatusCode::OK,
        Json(UserProfileResponse::from_user(
            user,
            follower_count,
            following_count,
        )),
    )
        .into_response()
}
