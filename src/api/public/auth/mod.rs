pub mod login;
pub mod register;

use serde::Serialize;
use utoipa::ToSchema;

/// Returned by both register and login: a bearer token plus a status message.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AuthResponse {
    pub token: String,
    pub message: String,
}
