//! The overlay card: header, tab bar, and the active tab's body.
//!
//! DESIGN
//! ======
//! The recycle tab swaps between four bodies driven by the selection phase
//! (capacity notice, confirmation, amount selection, catalog). The card is
//! only mounted while the overlay is visible, so hidden state never renders.

#[cfg(test)]
#[path = "station_card_test.rs"]
mod station_card_test;

use leptos::prelude::*;
use station::flow::FlowPhase;
use station::{Event, Overlay, Tab};

use crate::components::amount_select::AmountSelect;
use crate::components::batch_list::BatchList;
use crate::components::confirmation::Confirmation;
use crate::components::item_list::ItemList;
use crate::components::station_header::StationHeader;
use crate::net::host::Station;

/// Which body the recycle tab shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RecycleBody {
    Loading,
    AtCapacity { max_batches: u32 },
    Confirm,
    Amount,
    Catalog,
}

pub fn recycle_body(overlay: &Overlay) -> RecycleBody {
    let Some(data) = overlay.snapshot.as_ref() else {
        return RecycleBody::Loading;
    };
    if data.at_capacity() {
        return RecycleBody::AtCapacity { max_batches: data.max_batches };
    }
    if overlay.selection.show_confirmation() {
        return RecycleBody::Confirm;
    }
    match overlay.selection.phase {
        FlowPhase::AmountSelect => RecycleBody::Amount,
        _ => RecycleBody::Catalog,
    }
}

/// `"1/3"` batch usage shown on the status tab.
pub fn capacity_badge(overlay: &Overlay) -> Option<String> {
    overlay
        .snapshot
        .as_ref()
        .map(|data| format!("{}/{}", data.active_batches, data.max_batches))
}

#[component]
pub fn StationCard() -> impl IntoView {
    let station = expect_context::<Station>();
    let overlay = station.overlay;

    let tab = move || overlay.with(|o| o.tab);
    let tab_class = move |target: Tab| {
        move || if tab() == target { "tabs__trigger tabs__trigger--active" } else { "tabs__trigger" }
    };
    let body = Memo::new(move |_| overlay.with(recycle_body));

    view! {
        <div class="card">
            <StationHeader />
            <nav class="tabs">
                <button class=tab_class(Tab::Recycle) on:click=move |_| station.dispatch(Event::TabSelected(Tab::Recycle))>
                    <i class="fas fa-recycle"></i>
                    " Recycle Materials"
                </button>
                <button class=tab_class(Tab::Status) on:click=move |_| station.dispatch(Event::TabSelected(Tab::Status))>
                    <i class="fas fa-hourglass-half"></i>
                    " Processing Status"
                    {move || {
                        overlay.with(capacity_badge).map(|label| view! { <span class="badge badge--primary">{label}</span> })
                    }}
                </button>
            </nav>
            <div class="card__content">
                {move || match tab() {
                    Tab::Status => view! { <BatchList /> }.into_any(),
                    Tab::Recycle => match body.get() {
                        RecycleBody::Loading => view! { <p class="muted">"Loading station data..."</p> }.into_any(),
                        RecycleBody::AtCapacity { max_batches } => view! {
                            <div class="empty-state">
                                <i class="fas fa-exclamation-circle"></i>
                                <p>
                                    {format!("You have reached the maximum of {max_batches} active batches.")}
                                    " Please collect or wait for your current batches to complete."
                                </p>
                            </div>
                        }
                        .into_any(),
                        RecycleBody::Confirm => view! { <Confirmation /> }.into_any(),
                        RecycleBody::Amount => view! { <AmountSelect /> }.into_any(),
                        RecycleBody::Catalog => view! { <ItemList /> }.into_any(),
                    },
                }}
            </div>
        </div>
    }
}
