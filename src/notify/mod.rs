//! Single-slot, auto-dismissing notification channel.
//!
//! At most one message is visible. Each `notify` replaces the message and
//! restarts the dismissal timer; the previous timer is aborted, so a
//! superseded message can neither reappear nor clear its successor early.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use log::debug;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

/// How long a message stays visible by default.
pub const DEFAULT_TTL: Duration = Duration::from_millis(2000);

#[derive(Debug, Default)]
struct Slot {
    message: Option<String>,
    // Bumped on every notify/dismiss; a timer only clears its own message.
    generation: u64,
}

/// The notification slot and its pending dismissal timer.
///
/// Timers run as tokio tasks. Outside a runtime a message stays until it is
/// dismissed or replaced.
#[derive(Debug)]
pub struct NotificationChannel {
    slot: Arc<Mutex<Slot>>,
    ttl: Duration,
    timer: Option<JoinHandle<()>>,
}

impl NotificationChannel {
    /// Creates an empty channel whose messages expire after `ttl`.
    #[must_use]
    pub fn new(ttl: Duration) -> Self {
        Self { slot: Arc::default(), ttl, timer: None }
    }

    /// Shows `message`, replacing any current one, and restarts the timer.
    pub fn notify(&mut self, message: impl Into<String>) {
        self.cancel_timer();
        let generation = {
            let mut slot = self.slot.lock().expect("notification slot lock poisoned");
            slot.message = Some(message.into());
            slot.generation += 1;
            slot.generation
        };

        let Ok(handle) = Handle::try_current() else {
            debug!("event=notice_timer status=skipped reason=no_runtime");
            return;
        };
        let slot = Arc::clone(&self.slot);
        let ttl = self.ttl;
        self.timer = Some(handle.spawn(async move {
            tokio::time::sleep(ttl).await;
            let mut slot = slot.lock().expect("notification slot lock poisoned");
            if slot.generation == generation {
                slot.message = None;
            }
        }));
    }

    /// Clears the current message and cancels its timer.
    pub fn dismiss(&mut self) {
        self.cancel_timer();
        let mut slot = self.slot.lock().expect("notification slot lock poisoned");
        slot.message = None;
        slot.generation += 1;
    }

    /// The message to display, if any.
    #[must_use]
    pub fn current(&self) -> Option<String> {
        self.slot.lock().expect("notification slot lock poisoned").message.clone()
    }

    fn cancel_timer(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }
    }
}

impl Default for NotificationChannel {
    fn default() -> Self {
        Self::new(DEFAULT_TTL)
    }
}

impl Drop for NotificationChannel {
    fn drop(&mut self) {
        self.cancel_timer();
    }
}
