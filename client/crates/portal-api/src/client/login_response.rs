use portal_core::{BearerToken, UserProfile};

use serde::Deserialize;

/// Body of a successful `POST /login`.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub user: UserProfile,
    pub token: BearerToken,
}
