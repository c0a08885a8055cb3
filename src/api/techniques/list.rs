use super::TechniqueResponse;
use crate::api::ErrorResponse;
use crate::auth::AuthUser;
use crate::db::DbPool;
use crate::get_conn;
use crate::models::Technique;
use crate::schema::techniques;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use diesel::prelude::*;
use serde::Serialize;
use std::sync::Arc;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ListTechniquesResponse {
    pub techniques: Vec<TechniqueResponse>,
}

#[utoipa::path(
    get,
    path = "/api/techniques",
    tag = "techniques",
    responses(
        (status = 200, description = "List of all techniques, newest first", body = ListTechniquesResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn list_techniques(
    AuthUser(_user): AuthUser,
    State(pool): State<Arc<DbPool>>,
) -> impl IntoResponse {
    let mut conn = get_conn!(pool);

    let results: Vec<Technique> = match techniques::table
        .order(techniques::created_at.desc())
        .select(Technique::as_select())
        .load(&mut conn)
    {
        Ok(t) => t,
        Err(e) => {
            tracing::error!("Failed to fetch techniques: {}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to fetch techniques".to_string(),
                }),
            )
                .into_response();
        }
    };

    let techniques = results
        .into_iter()
        .map(TechniqueResponse::from_model)
        .collect();

    (StatusCode::OK, Json(ListTechniquesResponse { techniques })).into_response()
}
