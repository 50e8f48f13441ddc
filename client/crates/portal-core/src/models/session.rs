use crate::{BearerToken, UserProfile};

/// The client's belief about the current identity and credential.
///
/// A token never exists without an identity and vice versa; the only way to
/// build a `Session` is through [`Session::anonymous`] or
/// [`Session::authenticated`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    identity: Option<UserProfile>,
    token: Option<BearerToken>,
}

impl Session {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn authenticated(identity: UserProfile, token: BearerToken) -> Self {
        Self {
            identity: Some(identity),
            token: Some(token),
        }
    }

    pub fn identity(&self) -> Option<&UserProfile> {
        self.identity.as_ref()
    }

    pub fn token(&self) -> Option<&BearerToken> {
        self.token.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.identity.is_some()
    }
}
