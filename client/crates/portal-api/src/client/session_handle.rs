use portal_core::{BearerToken, Route, UserProfile};

/// The facade's view of the session store.
///
/// Injected into [`crate::ApiClient`] so that no request path reaches for a
/// shared default header.
pub trait SessionHandle: Send + Sync {
    /// Token snapshot for the request being built.
    fn bearer_token(&self) -> Option<BearerToken>;

    /// Called once per response with status 401, and when an authenticated
    /// call is attempted without a token.
    fn authorization_failed(&self);

    /// Called with the server's authoritative profile after a successful
    /// `GET /user`.
    fn identity_refreshed(&self, _profile: &UserProfile) {}
}

/// Client-side navigation owned by a browser host.
pub trait Navigator: Send + Sync {
    fn navigate(&self, route: Route);
}
