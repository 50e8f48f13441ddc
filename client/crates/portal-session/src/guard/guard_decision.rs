use portal_core::Route;

use serde_json::{Value, json};

/// What the shell should do with a requested route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    /// Session still restoring; show a neutral loading view.
    Placeholder,
    Render(Route),
    /// Go somewhere else; the requested path is not kept.
    Redirect(Route),
}

impl GuardDecision {
    pub fn to_json(&self) -> Value {
        match self {
            Self::Placeholder => json!({ "decision": "placeholder" }),
            Self::Render(route) => json!({ "decision": "render", "route": route.path() }),
            Self::Redirect(route) => json!({ "decision": "redirect", "route": route.path() }),
        }
    }
}
