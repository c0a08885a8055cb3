use super::RecipeResponse;
use crate::api::ErrorResponse;
use crate::auth::AuthUser;
use crate::db::DbPool;
use crate::get_conn;
use crate::models::{NewRecipe, Recipe};
use crate::schema::recipes;
use crate::uploads::{UploadStore, MAX_FILE_SIZE};
use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use diesel::prelude::*;
use std::sync::Arc;
use utoipa::ToSchema;

/// Multipart form shape, documented for the OpenAPI spec. The ingredients and
/// steps fields carry JSON array strings (the browser client serializes them
/// before appending to the FormData).
#[derive(ToSchema)]
#[allow(dead_code)]
pub struct CreateRecipeRequest {
    pub title: String,
    pub description: Option<String>,
    /// JSON array of ingredient strings, e.g. `["2 eggs", "100g flour"]`
    pub ingredients: String,
    /// JSON array of step strings
    pub steps: String,
    pub category: Option<String>,
    pub rating: Option<f64>,
    #[schema(value_type = String, format = Binary)]
    pub images: Vec<u8>,
}

/// Parse a form field that carries a JSON array of strings.
pub(super) fn parse_string_list(raw: &str) -> Result<Vec<String>, String> {
    serde_json::from_str::<Vec<String>>(raw)
        .map_err(|_| format!("Expected a JSON array of strings, got: {}", raw))
}

#[utoipa::path(
    post,
    path = "/api/recipes",
    tag = "recipes",
    request_body(content_type = "multipart/form-data", content = CreateRecipeRequest),
    responses(
        (status = 201, description = "Recipe created successfully", body = RecipeResponse),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn create_recipe(
    AuthUser(_user): AuthUser,
    State(pool): State<Arc<DbPool>>,
    mut multipart: Multipart,
) -> impl IntoResponse {
    let mut title: Option<String> = None;
    let mut description: Option<String> = None;
    let mut ingredients_raw: Option<String> = None;
    let mut steps_raw: Option<String> = None;
    let mut category: Option<String> = None;
    let mut rating: Option<f64> = None;
    let mut images: Vec<(String, Vec<u8>)> = Vec::new();

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(e) => {
                tracing::warn!("Multipart read error: {}", e);
                let error_msg = if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
                    format!("File too large. Maximum size is {} bytes", MAX_FILE_SIZE)
                } else {
                    format!("Failed to read multipart data: {}", e.body_text())
                };
                return (e.status(), Json(ErrorResponse { error: error_msg })).into_response();
            }
        };

        let name = field.name().unwrap_or_default().to_string();

        if name == "images" {
            let file_name = field.file_name().unwrap_or("image").to_string();
            match field.bytes().await {
                Ok(bytes) if !bytes.is_empty() => images.push((file_name, bytes.to_vec())),
                Ok(_) => {}
                Err(e) => {
                    tracing::warn!("Field read error: {}", e);
                    let error_msg = if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
                        format!("File too large. Maximum size is {} bytes", MAX_FILE_SIZE)
                    } else {
                        format!("Failed to read file data: {}", e.body_text())
                    };
                    return (e.status(), Json(ErrorResponse { error: error_msg })).into_response();
                }
            }
            continue;
        }

        let value = match field.text().await {
            Ok(v) => v,
            Err(e) => {
                return (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorResponse {
                        error: format!("Failed to read field {}: {}", name, e.body_text()),
                    }),
                )
                    .into_response()
            }
        };

        match name.as_str() {
            "title" => title = Some(value),
            "description" => description = Some(value),
            "ingredients" => ingredients_raw = Some(value),
            "steps" => steps_raw = Some(value),
            "category" => category = Some(value),
            "rating" => match value.parse::<f64>() {
                Ok(r) => rating = Some(r),
                Err(_) => {
                    return (
                        StatusCode::BAD_REQUEST,
                        Json(ErrorResponse {
                            error: format!("Invalid rating: {}", value),
                        }),
                    )
                        .into_response()
                }
            },
            // Unknown fields are ignored
            _ => {}
        }
    }

    let title = match title {
        Some(t) if !t.trim().is_empty() => t,
        _ => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: "Title cannot be empty".to_string(),
                }),
            )
                .into_response()
        }
    };

    let ingredients = match ingredients_raw.as_deref().map(parse_string_list) {
        Some(Ok(list)) => list,
        Some(Err(e)) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: format!("Invalid ingredients: {}", e),
                }),
            )
                .into_response()
        }
        None => Vec::new(),
    };

    let steps = match steps_raw.as_deref().map(parse_string_list) {
        Some(Ok(list)) => list,
        Some(Err(e)) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: format!("Invalid steps: {}", e),
                }),
            )
                .into_response()
        }
        None => Vec::new(),
    };

    // Write uploaded images to the upload directory before the insert. A
    // failed insert leaves the files orphaned on disk; there is no cleanup
    // transaction tying the two together.
    let store = UploadStore::from_env();
    let mut image_urls: Vec<Option<String>> = Vec::with_capacity(images.len());
    for (file_name, data) in &images {
        match store.save(file_name, data).await {
            Ok(url) => image_urls.push(Some(url)),
            Err(e) => {
                return (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorResponse {
                        error: format!("Failed to store image {}: {}", file_name, e),
                    }),
                )
                    .into_response()
            }
        }
    }

    let ingredients: Vec<Option<String>> = ingredients.into_iter().map(Some).collect();
    let steps: Vec<Option<String>> = steps.into_iter().map(Some).collect();

    let mut conn = get_conn!(pool);

    let new_recipe = NewRecipe {
        title: &title,
        description: description.as_deref(),
        ingredients: &ingredients,
        steps: &steps,
        category: category.as_deref(),
        rating,
        image_urls: &image_urls,
    };

    let recipe: Recipe = match diesel::insert_into(recipes::table)
        .values(&new_recipe)
        .returning(Recipe::as_returning())
        .get_result(&mut conn)
    {
        Ok(r) => r,
        Err(e) => {
            tracing::error!("Failed to create recipe: {}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to create recipe".to_string(),
                }),
            )
                .into_response();
        }
    };

    (StatusCode::CREATED, Json(RecipeResponse::from(recipe))).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_string_list() {
        assert_eq!(
            parse_string_list(r#"["2 eggs", "100g flour"]"#).unwrap(),
            vec!["2 eggs".to_string(), "100g flour".to_string()]
        );
    }

    #[test]
    fn test_parse_string_list_empty() {
        assert!(parse_string_list("[]").unwrap().is_empty());
    }

    #[test]
    fn test_parse_string_list_rejects_non_array() {
        assert!(parse_string_list(r#"{"a": 1}"#).is_err());
        assert!(parse_string_list("just text").is_err());
    }

    #[test]
    fn test_parse_string_list_rejects_mixed_types() {
        assert!(parse_string_list(r#"["ok", 2]"#).is_err());
    }
}
