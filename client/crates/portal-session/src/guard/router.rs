use crate::GuardDecision;

use portal_core::{Route, SessionState};

/// Gate for protected views.
pub fn guard(state: &SessionState, requested: Route) -> GuardDecision {
    match state {
        SessionState::Loading => GuardDecision::Placeholder,
        SessionState::Authenticated(_) => GuardDecision::Render(requested),
        SessionState::Unauthenticated => GuardDecision::Redirect(Route::Login),
    }
}

/// Decide what to show for any path of the portal.
pub fn resolve(state: &SessionState, requested: &Route) -> GuardDecision {
    match requested {
        Route::Root => match state {
            SessionState::Loading => GuardDecision::Placeholder,
            SessionState::Authenticated(_) => GuardDecision::Redirect(Route::Dashboard),
            SessionState::Unauthenticated => GuardDecision::Redirect(Route::Login),
        },
        Route::Login if state.is_authenticated() => GuardDecision::Redirect(Route::Dashboard),
        Route::Login | Route::Register => GuardDecision::Render(requested.clone()),
        Route::Dashboard | Route::Settings => guard(state, requested.clone()),
        Route::Unknown(_) => GuardDecision::Redirect(Route::Root),
    }
}
