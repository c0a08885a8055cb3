pub mod create;
pub mod delete;
pub mod list;
pub mod update;

use crate::models::Technique;
use crate::AppState;
use axum::routing::{get, put};
use axum::Router;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};
use uuid::Uuid;

/// Returns the router for /api/techniques endpoints (mounted at /api/techniques)
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(list::list_techniques).post(create::create_technique),
        )
        .route(
            "/{id}",
            put(update::update_technique).delete(delete::delete_technique),
        )
}

#[derive(Debug, Clone, Copy, Deserialize, Serialize, ToSchema, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum DifficultyLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl DifficultyLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            DifficultyLevel::Beginner => "beginner",
            DifficultyLevel::Intermediate => "intermediate",
            DifficultyLevel::Advanced => "advanced",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "beginner" => Some(DifficultyLevel::Beginner),
            "intermediate" => Some(DifficultyLevel::Intermediate),
            "advanced" => Some(DifficultyLevel::Advanced),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct TechniqueResponse {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub difficulty_level: DifficultyLevel,
    /// Comma-separated tag list, stored as entered
    pub tags: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TechniqueResponse {
    /// Rows predating the difficulty enum fall back to beginner
    pub fn from_model(technique: Technique) -> Self {
        let difficulty_level = DifficultyLevel::from_str(&technique.difficulty_level)
            .unwrap_or(DifficultyLevel::Beginner);
        TechniqueResponse {
            id: technique.id,
            title: technique.title,
            description: technique.description,
            image_url: technique.image_url,
            difficulty_level,
            tags: technique.tags,
            created_at: technique.created_at,
            updated_at: technique.updated_at,
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        create::create_technique,
        list::list_techniques,
        update::update_technique,
        delete::delete_technique,
    ),
    components(schemas(
        DifficultyLevel,
        TechniqueResponse,
        create::CreateTechniqueRequest,
        list::ListTechniquesResponse,
        update::UpdateTechniqueRequest,
    ))
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_round_trip() {
        for level in [
            DifficultyLevel::Beginner,
            DifficultyLevel::Intermediate,
            DifficultyLevel::Advanced,
        ] {
            assert_eq!(DifficultyLevel::from_str(level.as_str()), Some(level));
        }
    }

    #[test]
    fn test_difficulty_from_str_is_case_insensitive() {
        assert_eq!(
            DifficultyLevel::from_str("Advanced"),
            Some(DifficultyLevel::Advanced)
        );
    }

    #[test]
    fn test_difficulty_from_str_rejects_unknown() {
        assert_eq!(DifficultyLevel::from_str("expert"), None);
        assert_eq!(DifficultyLevel::from_str(""), None);
    }
}
