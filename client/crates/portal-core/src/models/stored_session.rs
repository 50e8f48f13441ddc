use crate::{BearerToken, UserProfile};

use serde::{Deserialize, Serialize};

/// Durable record kept under the `auth` storage key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredSession {
    pub user: UserProfile,
    pub token: BearerToken,
}

impl StoredSession {
    pub fn new(user: UserProfile, token: BearerToken) -> Self {
        Self { user, token }
    }
}
