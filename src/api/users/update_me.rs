use super::get_me::{load_follow_counts, UserProfileResponse};
use crate::api::ErrorResponse;
use crate::auth::AuthUser;
use crate::db::DbPool;
use crate::get_conn;
use crate::models::User;
use crate::schema::users;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use diesel::prelude::*;
use serde::Deserialize;
use std::sync::Arc;
use utoipa::ToSchema;

/// Profile update; omitted fields keep their stored values.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdateProfileRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub bio: Option<String>,
    pub profile_picture_url: Option<String>,
    pub skills: Option<Vec<String>>,
}

#[utoipa::path(
    put,
    path = "/api/users/me",
    tag = "users",
    request_body = UpdateProfileRequest,
    responses(
        (status = 200, description = "Profile updated successfully", body = UserProfileResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn update_me(
    AuthUser(user): AuthUser,
    State(pool): State<Arc<DbPool>>,
    Json(request): Json<UpdateProfileRequest>,
) -> impl IntoResponse {
    let mut conn = get_conn!(pool);

    // Merge request with stored values
    let first_name = request.first_name.or(user.first_name);
    let last_name = request.last_name.or(user.last_name);
    let bio = request.bio.or(user.bio);
    let profile_picture_url = request.profile_picture_url.or(user.profile_picture_url);
    let skills: Vec<Option<String>> = request
        .skills
        .map(|skills| skills.into_iter().map(Some).collect())
        .unwrap_or(user.skills);

    let updated: User = match diesel::update(users::table.find(user.id))
        .set((
            users::first_name.eq(first_name.as_deref()),
            users::last_name.eq(last_name.as_deref()),
            users::bio.eq(bio.as_deref()),
            users::profile_picture_url.eq(profile_picture_url.as_deref()),
            users::skills.eq(&skills),
        ))
        .returning(User::as_returning())
        .get_result(&mut conn)
    {
        Ok(u) => u,
        Err(e) => {
            tracing::error!("Failed to update profile: {}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to update profile".to_string(),
                }),
            )
                .into_response();
        }
    };

    let (follower_count, following_count) = match load_follow_counts(&mut conn, updated.id) {
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
            updated,
            follower_count,
            following_count,
        )),
    )
        .into_response()
}
