pub(crate) mod session_event;
pub(crate) mod session_store;

pub use session_event::SessionEvent;
pub use session_store::SessionStore;
