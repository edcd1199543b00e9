//! Quantity stepper, target material picker, and running fee for the
//! selected item.

#[cfg(test)]
#[path = "amount_select_test.rs"]
mod amount_select_test;

use leptos::prelude::*;
use station::flow::SelectionFlow;
use station::format;
use station::{Event, Overlay, RecyclingData};

use crate::net::host::Station;

pub fn can_decrement(flow: &SelectionFlow) -> bool {
    flow.selected_amount > 1
}

pub fn can_increment(flow: &SelectionFlow, data: &RecyclingData) -> bool {
    flow.selected_amount < flow.available(data)
}

/// Heading for the selected item.
pub fn item_title(flow: &SelectionFlow, data: &RecyclingData) -> String {
    flow.selected_item
        .as_deref()
        .and_then(|key| data.recyclable_items.get(key))
        .map_or_else(|| "Selected Item".to_owned(), |item| item.label.clone())
}

/// Whether the target material picker is shown.
pub fn needs_material(flow: &SelectionFlow, data: &RecyclingData) -> bool {
    flow.selected_item
        .as_deref()
        .and_then(|key| data.recyclable_items.get(key))
        .is_some_and(station::RecyclableItem::needs_target_material)
}

/// Evaluate `check` against the current selection, `false` without a snapshot.
fn selection_check(overlay: RwSignal<Overlay>, check: impl Fn(&SelectionFlow, &RecyclingData) -> bool) -> bool {
    overlay.with(|o| o.snapshot.as_ref().is_some_and(|data| check(&o.selection, data)))
}

#[component]
pub fn AmountSelect() -> impl IntoView {
    let station = expect_context::<Station>();
    let overlay = station.overlay;

    let amount = move || overlay.with(|o| o.selection.selected_amount);
    let available = move || overlay.with(|o| o.snapshot.as_ref().map_or(0, |data| o.selection.available(data)));
    let title = move || {
        overlay.with(|o| o.snapshot.as_ref().map(|data| item_title(&o.selection, data)).unwrap_or_default())
    };
    let selected_material = move || overlay.with(|o| o.selection.selected_target_material.clone());
    let materials = move || {
        overlay.with(|o| {
            o.snapshot
                .as_ref()
                .map(|data| {
                    data.materials
                        .iter()
                        .map(|(key, material)| (key.clone(), material.label.clone(), material.icon.clone()))
                        .collect::<Vec<_>>()
                })
                .unwrap_or_default()
        })
    };
    let fee = move || overlay.with(|o| format::fee(o.selection.processing_fee));

    view! {
        <section class="amount-select">
            <div class="amount-select__heading">
                <button class="button button--ghost" on:click=move |_| station.dispatch(Event::SelectionCleared)>
                    <i class="fas fa-arrow-left"></i>
                    " Back"
                </button>
                <h3 class="section-title">{title}</h3>
            </div>

            <label class="field-label">{move || format!("Amount to Process (Max: {})", available())}</label>
            <div class="amount-select__stepper">
                <button
                    class="button button--outline button--icon"
                    disabled=move || !selection_check(overlay, |flow, _| can_decrement(flow))
                    on:click=move |_| station.dispatch(Event::AmountChanged(i64::from(amount()) - 1))
                >
                    <i class="fas fa-minus"></i>
                </button>
                <input
                    type="number"
                    class="amount-select__input"
                    min="1"
                    max=move || available().to_string()
                    prop:value=move || amount().to_string()
                    on:change=move |ev| station.dispatch(Event::AmountEntered(event_target_value(&ev)))
                />
                <button
                    class="button button--outline button--icon"
                    disabled=move || !selection_check(overlay, can_increment)
                    on:click=move |_| station.dispatch(Event::AmountChanged(i64::from(amount()) + 1))
                >
                    <i class="fas fa-plus"></i>
                </button>
            </div>

            <Show when=move || selection_check(overlay, needs_material)>
                <label class="field-label">"Target Material"</label>
                <div class="amount-select__materials">
                    {move || {
                        materials()
                            .into_iter()
                            .map(|(key, label, icon)| {
                                let chosen = {
                                    let key = key.clone();
                                    move || selected_material().as_deref() == Some(key.as_str())
                                };
                                let class = move || {
                                    if chosen() { "button button--outline button--active" } else { "button button--outline" }
                                };
                                view! {
                                    <button
                                        class=class
                                        on:click=move |_| station.dispatch(Event::TargetMaterialSelected(key.clone()))
                                    >
                                        <i class=icon></i>
                                        <span>{label}</span>
                                    </button>
                                }
                            })
                            .collect_view()
                    }}
                </div>
            </Show>

            <div class="summary-row">
                <span>"Processing Fee:"</span>
                <span>{fee}</span>
            </div>

            <button
                class="button button--primary button--wide"
                disabled=move || !selection_check(overlay, |flow, data| flow.can_confirm(data))
                on:click=move |_| station.dispatch(Event::ConfirmRequested)
            >
                "Process Materials"
            </button>
        </section>
    }
}
