//! Root application component and overlay lifecycle wiring.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provides the [`Station`] handle to every component, installs the host
//! message and key listeners once, and owns the two status-view timers.
//!
//! TIMERS
//! ======
//! The 1 s countdown and the 30 s re-poll exist exactly while the status view
//! is active (overlay visible and on the status tab). An effect keyed on that
//! flag creates both tasks when it turns on and drops them when it turns off,
//! which cancels any pending tick.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use station::{Event, Overlay};
use station::batches::{COUNTDOWN_PERIOD, REFRESH_PERIOD};

use crate::components::station_card::StationCard;
use crate::net::events;
use crate::net::host::Station;
use crate::util::env::NuiConfig;
use crate::util::theme;
use crate::util::timers::RepeatingTask;

/// Timers owned by the status view.
struct StatusTimers {
    _countdown: RepeatingTask,
    _refresh: RepeatingTask,
}

impl StatusTimers {
    fn start(station: Station) -> Self {
        Self {
            _countdown: RepeatingTask::spawn(COUNTDOWN_PERIOD, move || station.dispatch(Event::CountdownTick)),
            _refresh: RepeatingTask::spawn(REFRESH_PERIOD, move || station.dispatch(Event::RefreshTick)),
        }
    }
}

#[component]
pub fn App() -> impl IntoView {
    let config = NuiConfig::detect();
    log::info!("overlay starting in {:?} mode, callbacks at {}", config.env, config.base_url);
    let browser = config.is_browser();

    let station = Station::new(config);
    provide_context(station);

    theme::apply(browser);
    events::listen(station);

    let status_active = Memo::new(move |_| station.overlay.with(Overlay::status_view_active));
    let timers: Rc<RefCell<Option<StatusTimers>>> = Rc::new(RefCell::new(None));
    Effect::new(move || {
        let active = status_active.get();
        let mut slot = timers.borrow_mut();
        match (active, slot.is_some()) {
            (true, false) => *slot = Some(StatusTimers::start(station)),
            (false, true) => *slot = None,
            _ => {}
        }
    });

    if browser {
        // Nothing outside the game opens the overlay, so open it ourselves.
        station.dispatch(events::browser_open_event());
    }

    let visible = move || station.overlay.with(|o| o.visible);

    view! {
        <main class="overlay-root">
            <Show when=visible>
                <div class="overlay-frame">
                    <StationCard />
                </div>
            </Show>
        </main>
    }
}
