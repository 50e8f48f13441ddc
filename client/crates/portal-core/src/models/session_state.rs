use crate::UserProfile;

use serde::Serialize;

/// Observable lifecycle of the session store.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(tag = "status", content = "user", rename_all = "snake_case")]
pub enum SessionState {
    /// Persisted session not yet restored; nothing protected may render.
    #[default]
    Loading,
    Unauthenticated,
    Authenticated(UserProfile),
}

impl SessionState {
    pub fn identity(&self) -> Option<&UserProfile> {
        match self {
            Self::Authenticated(user) => Some(user),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }
}
