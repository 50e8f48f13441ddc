/// Transitions published to every view observing the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    LoggedIn,
    LoggedOut,
    /// Identity replaced by a fresher copy from the backend.
    Refreshed,
}
