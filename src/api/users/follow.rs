use crate::api::ErrorResponse;
use crate::auth::AuthUser;
use crate::db::DbPool;
use crate::get_conn;
use crate::models::NewUserFollow;
use crate::schema::{user_follows, users};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use std::sync::Arc;
use uuid::Uuid;

#[utoipa::path(
    post,
    path = "/api/users/{id}/follow",
    tag = "users",
    params(
        ("id" = Uuid, Path, description = "User to follow")
    ),
    responses(
        (status = 204, description = "Now following the user"),
        (status = 400, description = "Cannot follow yourself", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 409, description = "Already following this user", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn follow_user(
    AuthUser(user): AuthUser,
    State(pool): State<Arc<DbPool>>,
    Path(id): Path<Uuid>,
) -> impl IntoResponse {
    if id == user.id {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "Cannot follow yourself".to_string(),
            }),
        )
            .into_response();
    }

    let mut conn = get_conn!(pool);

    let target_exists: Option<Uuid> = users::table
        .find(id)
        .filter(users::deleted_at.is_null())
        .select(users::id)
        .first(&mut conn)
        .optional()
        .unwrap_or(None);

    if target_exists.is_none() {
        return (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: "User not found".to_string(),
            }),
        )
            .into_response();
    }

    let result = diesel::insert_into(user_follows::table)
        .values(NewUserFollow {
            follower_id: user.id,
            followed_id: id,
        })
        .execute(&mut conn);

    match result {
        Ok(_) => StatusCode::NO_CONTENT.into_response(),
        Err(DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _)) => (
            StatusCode::CONFLICT,
            Json(ErrorResponse {
                error: "Already following this user".to_string(),
            }),
        )
            .into_response(),
        Err(e) => {
            tracing::error!("Failed to follow user: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to follow user".to_string(),
                }),
            )
                .into_response()
        }
    }
}
