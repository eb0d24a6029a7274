// Trailing-edge debouncer
//
// Each call cancels the pending invocation (if any) and schedules a new one
// after the delay, so a burst of calls collapses into a single invocation
// carrying the arguments of the last call.

use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;

/// Default delay used by the CLI when no setting overrides it
pub const DEFAULT_DEBOUNCE_DELAY_MS: u64 = 50;

/// Error types for debounce operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DebounceError {
    /// `call` was made outside a Tokio runtime
    #[error("Debounced call requires a running Tokio runtime")]
    NoRuntime,
}

/// Collapses bursts of calls into one trailing invocation
///
/// Usage:
/// ```ignore
/// let debouncer = Debouncer::new(Duration::from_millis(50), |query: String| search(&query));
/// debouncer.call("r".into())?;
/// debouncer.call("ru".into())?;
/// debouncer.call("rust".into())?; // only this one runs, 50ms from now
/// ```
pub struct Debouncer<A> {
    /// Quiet period required before the callback runs
    delay: Duration,
    /// Function invoked with the last call's arguments
    callback: Arc<dyn Fn(A) + Send + Sync>,
    /// Handle of the scheduled invocation, if one is waiting
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl<A: Send + 'static> Debouncer<A> {
    /// Create a debouncer wrapping `callback`
    pub fn new<F>(delay: Duration, callback: F) -> Self
    where
        F: Fn(A) + Send + Sync + 'static,
    {
        Self {
            delay,
            callback: Arc::new(callback),
            pending: Mutex::new(None),
        }
    }

    /// Create a debouncer with the delay given in milliseconds
    pub fn from_millis<F>(delay_ms: u64, callback: F) -> Self
    where
        F: Fn(A) + Send + Sync + 'static,
    {
        Self::new(Duration::from_millis(delay_ms), callback)
    }

    /// Request an invocation with `args`
    ///
    /// Cancels any pending invocation and schedules a new one after the delay.
    /// Must be called from within a Tokio runtime.
    pub fn call(&self, args: A) -> Result<(), DebounceError> {
        let runtime = tokio::runtime::Handle::try_current().map_err(|_| DebounceError::NoRuntime)?;

        let mut guard = self.pending.lock();

        if let Some(handle) = guard.take() {
            if !handle.is_finished() {
                crate::trace!("Cancelled pending call (debounce)");
            }
            handle.abort();
        }

        let callback = Arc::clone(&self.callback);
        let delay = self.delay;
        let handle = runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            callback(args);
        });

        *guard = Some(handle);
        Ok(())
    }

    /// Drop the pending invocation without running it
    ///
    /// Returns true if an invocation was actually waiting.
    pub fn cancel(&self) -> bool {
        match self.pending.lock().take() {
            Some(handle) => {
                let was_waiting = !handle.is_finished();
                handle.abort();
                if was_waiting {
                    crate::debug!("Debounced call cancelled");
                }
                was_waiting
            }
            None => false,
        }
    }

    /// True while an invocation is scheduled but has not run yet
    pub fn is_pending(&self) -> bool {
        self.pending
            .lock()
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    /// Configured quiet period
    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl<A> Drop for Debouncer<A> {
    fn drop(&mut self) {
        if let Some(handle) = self.pending.get_mut().take() {
            handle.abort();
        }
    }
}

#[cfg(test)]
#[path = "debounce_test.rs"]
mod tests;
