//! Cancellable repeating tasks.
//!
//! Each task is a local future that sleeps for its period and then runs the
//! callback, checking a shared liveness flag before every run. Dropping the
//! handle cancels the task; a callback already scheduled for the current
//! period is skipped.

#[cfg(test)]
#[path = "timers_test.rs"]
mod timers_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

/// Handle to a repeating task. Cancels on drop.
#[derive(Debug)]
pub struct RepeatingTask {
    alive: Arc<AtomicBool>,
}

impl RepeatingTask {
    /// Run `tick` every `period` until the handle is dropped or cancelled.
    pub fn spawn(period: Duration, tick: impl Fn() + 'static) -> Self {
        let alive = Arc::new(AtomicBool::new(true));
        #[cfg(feature = "csr")]
        {
            let alive_task = Arc::clone(&alive);
            leptos::task::spawn_local(async move {
                loop {
                    gloo_timers::future::sleep(period).await;
                    if !alive_task.load(Ordering::Relaxed) {
                        break;
                    }
                    tick();
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (period, tick);
        }
        Self { alive }
    }

    pub fn cancel(&self) {
        self.alive.store(false, Ordering::Relaxed);
    }
}

impl Drop for RepeatingTask {
    fn drop(&mut self) {
        self.cancel();
    }
}
