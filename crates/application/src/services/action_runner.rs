//! Single-deep action runner
//!
//! Runs one user action at a time on the tokio runtime. While an action is in
//! flight further submissions are rejected with [`ApplicationError::Busy`];
//! the in-flight action can be cancelled, after which its handle resolves to
//! [`ApplicationError::Cancelled`]. The slot frees itself as soon as the task
//! finishes, panics or is aborted.

use std::fmt;
use std::future::Future;
use std::sync::Arc;

use parking_lot::Mutex;
use tokio::task::{AbortHandle, JoinHandle};
use tracing::{debug, warn};

use crate::error::ApplicationError;

#[derive(Debug, Default)]
struct Slot {
    generation: u64,
    in_flight: Option<InFlight>,
}

/// Reservation for the running action; the abort handle is filled in once
/// the task has been spawned
#[derive(Debug, Default)]
struct InFlight {
    abort: Option<AbortHandle>,
}

/// Frees the slot when the action's future is dropped
struct SlotRelease {
    slot: Arc<Mutex<Slot>>,
    generation: u64,
}

impl Drop for SlotRelease {
    fn drop(&mut self) {
        let mut slot = self.slot.lock();
        // A cancelled action may be dropped after a newer one took the slot
        if slot.generation == self.generation {
            slot.in_flight = None;
        }
    }
}

/// Runs at most one action at a time
#[derive(Debug, Clone, Default)]
pub struct ActionRunner {
    slot: Arc<Mutex<Slot>>,
}

impl ActionRunner {
    /// Create an idle runner
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether an action is currently in flight
    pub fn is_busy(&self) -> bool {
        self.slot.lock().in_flight.is_some()
    }

    /// Start `action` unless another one is running
    ///
    /// # Errors
    ///
    /// Returns `Busy` while an action is in flight, or `Internal` when called
    /// outside a tokio runtime.
    pub fn submit<F, T>(&self, action: F) -> Result<ActionHandle<T>, ApplicationError>
    where
        F: Future<Output = Result<T, ApplicationError>> + Send + 'static,
        T: Send + 'static,
    {
        let runtime = tokio::runtime::Handle::try_current()
            .map_err(|e| ApplicationError::Internal(e.to_string()))?;

        let generation = {
            let mut slot = self.slot.lock();
            if slot.in_flight.is_some() {
                debug!("Rejecting action, another one is in flight");
                return Err(ApplicationError::Busy);
            }
            slot.generation += 1;
            slot.in_flight = Some(InFlight::default());
            slot.generation
        };

        let release = SlotRelease {
            slot: Arc::clone(&self.slot),
            generation,
        };

        // Spawned without holding the lock: a runtime that is shutting down
        // drops the future (and its release) inline
        let handle = runtime.spawn(async move {
            let _release = release;
            action.await
        });

        {
            let mut guard = self.slot.lock();
            let slot = &mut *guard;
            match slot.in_flight.as_mut() {
                Some(in_flight) if slot.generation == generation => {
                    in_flight.abort = Some(handle.abort_handle());
                },
                // Already finished or cancelled before the handle was stored
                _ => handle.abort(),
            }
        }
        debug!(generation, "Action started");

        Ok(ActionHandle { handle })
    }

    /// Abort the in-flight action, if any
    ///
    /// Returns true if an action was cancelled. The runner accepts new
    /// submissions immediately afterwards.
    pub fn cancel(&self) -> bool {
        let in_flight = self.slot.lock().in_flight.take();
        match in_flight {
            Some(in_flight) => {
                if let Some(abort) = in_flight.abort {
                    abort.abort();
                }
                debug!("Action cancelled");
                true
            },
            None => false,
        }
    }
}

/// Handle to a submitted action
pub struct ActionHandle<T> {
    handle: JoinHandle<Result<T, ApplicationError>>,
}

impl<T> fmt::Debug for ActionHandle<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActionHandle")
            .field("finished", &self.handle.is_finished())
            .finish()
    }
}

impl<T> ActionHandle<T> {
    /// Wait for the action's result
    pub async fn join(self) -> Result<T, ApplicationError> {
        match self.handle.await {
            Ok(result) => result,
            Err(e) if e.is_cancelled() => Err(ApplicationError::Cancelled),
            Err(e) => {
                warn!(error = %e, "Action panicked");
                Err(ApplicationError::Internal(format!("action failed: {e}")))
            },
        }
    }
}
