//! Recyclable item catalog shown while browsing.
//!
//! Items the player holds none of stay listed but disabled.

#[cfg(test)]
#[path = "item_list_test.rs"]
mod item_list_test;

use leptos::prelude::*;
use station::format;
use station::{Event, ItemCategory, RecyclingData};

use crate::net::host::Station;

/// One rendered catalog row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ItemRow {
    pub key: String,
    pub label: String,
    pub icon: String,
    pub available: u32,
    pub process_time: String,
    pub fixed_output: bool,
}

impl ItemRow {
    pub fn selectable(&self) -> bool {
        self.available > 0
    }

    pub fn availability(&self) -> String {
        if self.selectable() { format!("Available: {}", self.available) } else { "Not available".to_owned() }
    }
}

/// Catalog rows in key order.
pub fn rows(data: &RecyclingData) -> Vec<ItemRow> {
    data.recyclable_items
        .iter()
        .map(|(key, item)| ItemRow {
            key: key.clone(),
            label: item.label.clone(),
            icon: item.icon.clone(),
            available: data.available(key),
            process_time: format::millis_as_seconds(item.processing_time),
            fixed_output: item.category == ItemCategory::Fixed,
        })
        .collect()
}

#[component]
pub fn ItemList() -> impl IntoView {
    let station = expect_context::<Station>();
    let overlay = station.overlay;
    let items = move || overlay.with(|o| o.snapshot.as_ref().map(rows).unwrap_or_default());

    view! {
        <section class="item-list">
            <h3 class="section-title">"Recyclable Materials"</h3>
            <div class="item-list__scroll">
                {move || {
                    items()
                        .into_iter()
                        .map(|row| {
                            let key = row.key.clone();
                            view! {
                                <button
                                    class="item-list__row"
                                    disabled=!row.selectable()
                                    on:click=move |_| station.dispatch(Event::ItemSelected(key.clone()))
                                >
                                    <span class="item-list__label">
                                        <i class=row.icon.clone()></i>
                                        {row.label.clone()}
                                    </span>
                                    <span class="item-list__meta">
                                        <span>{row.availability()}</span>
                                        <span>{format!("Process Time: {}", row.process_time)}</span>
                                        {row.fixed_output.then(|| view! { <span>"Fixed Output"</span> })}
                                    </span>
                                </button>
                            }
                        })
                        .collect_view()
                }}
            </div>
        </section>
    }
}
