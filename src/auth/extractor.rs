use crate::api::ErrorResponse;
use crate::db::DbPool;
use crate::models::User;
use axum::{
    extract::FromRequestParts,
    http::{request::Parts, StatusCode},
    Json,
};
use std::sync::Arc;

use super::bearer_token;
use super::db::get_user_from_token;

/// Extractor that resolves the authenticated user from the Bearer token.
/// Handlers take `AuthUser(user): AuthUser` as their first argument.
pub struct AuthUser(pub User);

fn unauthorized(message: &str) -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::UNAUTHORIZED,
        Json(ErrorResponse {
            error: message.to_string(),
        }),
    )
}

impl FromRequestParts<Arc<DbPool>> for AuthUser {
    type Rejection = (StatusCode, Json<ErrorResponse>);

    async fn from_request_parts(
        parts: &mut Parts,
        pool: &Arc<DbPool>,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(&parts.headers).map_err(unauthorized)?;

        let user = get_user_from_token(pool, token)
            .await
            .ok_or_else(|| unauthorized("Invalid or expired token"))?;

        Ok(AuthUser(user))
    }
}
