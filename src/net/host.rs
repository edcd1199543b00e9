//! Dispatch loop between the reactive overlay state and the host bridge.
//!
//! ARCHITECTURE
//! ============
//! Components and listeners never touch [`Overlay`] fields directly; they
//! hand events to [`Station::dispatch`]. The reducer's commands are spawned
//! as local futures and their results re-enter through the same dispatch, so
//! every state change is a single `apply` call on the signal.

use leptos::prelude::*;
use station::{Command, Event, Overlay};

use crate::util::env::NuiConfig;

/// Handle shared through context by every component of the overlay.
#[derive(Clone, Copy)]
pub struct Station {
    pub overlay: RwSignal<Overlay>,
    config: StoredValue<NuiConfig>,
}

impl Station {
    pub fn new(config: NuiConfig) -> Self {
        Self {
            overlay: RwSignal::new(Overlay::new(config.fallback)),
            config: StoredValue::new(config),
        }
    }

    /// Apply an event and execute the resulting host calls.
    pub fn dispatch(self, event: Event) {
        let commands = self.overlay.try_update(|overlay| overlay.apply(event)).unwrap_or_default();
        for command in commands {
            self.spawn(command);
        }
    }

    fn spawn(self, command: Command) {
        #[cfg(feature = "csr")]
        {
            let config = self.config.get_value();
            leptos::task::spawn_local(async move {
                let event = super::nui::execute(&config, command).await;
                self.dispatch(event);
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            self.config.with_value(|config| {
                log::debug!("no bridge for {} outside the browser", config.endpoint(command.callback()));
            });
        }
    }
}
