pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use crate::models::Recipe;
use crate::AppState;
use axum::extract::DefaultBodyLimit;
use axum::routing::get;
use axum::Router;
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::{OpenApi, ToSchema};
use uuid::Uuid;

/// Returns the router for /api/recipes endpoints (mounted at /api/recipes)
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list::list_recipes).post(create::create_recipe))
        .route(
            "/{id}",
            get(get::get_recipe)
                .put(update::update_recipe)
                .delete(delete::delete_recipe),
        )
        // Room for a handful of image parts; per-file size is checked on save
        .layer(DefaultBodyLimit::max(32 * 1024 * 1024))
}

/// Full recipe body returned by create, get and list
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct RecipeResponse {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub ingredients: Vec<String>,
    pub steps: Vec<String>,
    pub category: Option<String>,
    pub rating: Option<f64>,
    pub image_urls: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Recipe> for RecipeResponse {
    fn from(recipe: Recipe) -> Self {
        RecipeResponse {
            id: recipe.id,
            title: recipe.title,
            description: recipe.description,
            ingredients: recipe.ingredients.into_iter().flatten().collect(),
            steps: recipe.steps.into_iter().flatten().collect(),
            category: recipe.category,
            rating: recipe.rating,
            image_urls: recipe.image_urls.into_iter().flatten().collect(),
            created_at: recipe.created_at,
            updated_at: recipe.updated_at,
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        create::create_recipe,
        list::list_recipes,
        get::get_recipe,
        update::update_recipe,
        delete::delete_recipe,
    ),
    components(schemas(
        RecipeResponse,
        create::CreateRecipeRequest,
        list::ListRecipesResponse,
        update::UpdateRecipeRequest,
    ))
)]
pub struct ApiDoc;
