pub mod follow;
pub mod get_me;
pub mod learning_session;
pub mod unfollow;
pub mod update_me;

use crate::AppState;
use axum::routing::{get, post};
use axum::Router;
use utoipa::OpenApi;

/// Returns the router for /api/users endpoints (mounted at /api/users)
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/me", get(get_me::get_me).put(update_me::update_me))
        .route(
            "/me/learning-sessions",
            post(learning_session::record_learning_session),
        )
        .route(
            "/{id}/follow",
            post(follow::follow_user).delete(unfollow::unfollow_user),
        )
}

/// Display name falls back through the name fields to the username.
pub(super) fn full_name(
    first_name: Option<&str>,
    last_name: Option<&str>,
    username: &str,
) -> String {
    match (first_name, last_name) {
        (Some(first), Some(last)) => format!("{} {}", first, last),
        (Some(first), None) => first.to_string(),
        (None, Some(last)) => last.to_string(),
        (None, None) => username.to_string(),
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        get_me::get_me,
        update_me::update_me,
        follow::follow_user,
        unfollow::unfollow_user,
        learning_session::record_learning_session,
    ),
    components(schemas(
        get_me::UserProfileResponse,
        update_me::UpdateProfileRequest,
        learning_session::LearningSessionRequest,
        learning_session::LearningSessionResponse,
    ))
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_name_prefers_both_names() {
        assert_eq!(full_name(Some("Ada"), Some("Lovelace"), "ada"), "Ada Lovelace");
    }

    #[test]
    fn test_full_name_single_name() {
        assert_eq!(full_name(Some("Ada"), None, "ada"), "Ada");
        assert_eq!(full_name(None, Some("Lovelace"), "ada"), "Lovelace");
    }

    #[test]
    fn test_full_name_falls_back_to_username() {
        assert_eq!(full_name(None, None, "ada"), "ada");
    }
}
