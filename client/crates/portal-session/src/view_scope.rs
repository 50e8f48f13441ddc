use crate::{SessionError, SessionResult};

use std::future::Future;

use log::debug;
use tokio::sync::watch;

/// Lifetime of a mounted view.
///
/// Work started through [`ViewScope::run`] is abandoned once the scope is
/// unmounted; its result is never handed back.
#[derive(Clone)]
pub struct ViewScope {
    unmounted_tx: watch::Sender<bool>,
}

impl ViewScope {
    pub fn new() -> Self {
        let (unmounted_tx, _) = watch::channel(false);
        Self { unmounted_tx }
    }

    pub fn unmount(&self) {
        if !self.unmounted_tx.send_replace(true) {
            debug!("View unmounted; abandoning pending work");
        }
    }

    pub fn is_unmounted(&self) -> bool {
        *self.unmounted_tx.borrow()
    }

    /// Drive `fut` unless the view goes away first.
    pub async fn run<F, T>(&self, fut: F) -> SessionResult<T>
    where
        F: Future<Output = T>,
    {
        let mut unmounted = self.unmounted_tx.subscribe();

        if *unmounted.borrow_and_update() {
            return Err(SessionError::abandoned());
        }

        let output = tokio::select! {
            output = fut => output,
            _ = unmounted.wait_for(|gone| *gone) => return Err(SessionError::abandoned()),
        };

        // The view may have gone while the last poll completed.
        if self.is_unmounted() {
            return Err(SessionError::abandoned());
        }

        Ok(output)
    }
}

impl Default for ViewScope {
    fn default() -> Self {
        Self::new()
    }
}
