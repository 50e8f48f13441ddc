pub(crate) mod guard_decision;
pub(crate) mod router;

pub use guard_decision::GuardDecision;
pub use router::{guard, resolve};
