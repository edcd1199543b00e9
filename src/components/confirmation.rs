//! Summary shown before a batch is submitted.

#[cfg(test)]
#[path = "confirmation_test.rs"]
mod confirmation_test;

use leptos::prelude::*;
use station::flow::{FlowPhase, SelectionFlow};
use station::format;
use station::{Event, RecyclingData};

use crate::net::host::Station;

/// Label/value pairs of the confirmation summary.
pub fn summary(flow: &SelectionFlow, data: &RecyclingData) -> Vec<(&'static str, String)> {
    let item = flow.selected_item.as_deref().and_then(|key| data.recyclable_items.get(key));
    let mut lines = vec![
        ("Amount:", format!("{} units", flow.selected_amount)),
        ("Item:", item.map(|item| item.label.clone()).unwrap_or_default()),
    ];
    if item.is_some_and(station::RecyclableItem::needs_target_material) {
        if let Some(material) = flow.selected_target_material.as_deref().and_then(|key| data.materials.get(key)) {
            lines.push(("Target Material:", material.label.clone()));
        }
    }
    lines.push(("Processing Fee:", format::fee(flow.processing_fee)));
    lines.push(("Estimated Time:", format!("~{} minutes", flow.estimated_minutes(data))));
    lines
}

#[component]
pub fn Confirmation() -> impl IntoView {
    let station = expect_context::<Station>();
    let overlay = station.overlay;

    let lines = move || {
        overlay.with(|o| o.snapshot.as_ref().map(|data| summary(&o.selection, data)).unwrap_or_default())
    };
    let submitted = move || overlay.with(|o| o.selection.phase == FlowPhase::Submitted);

    view! {
        <section class="confirmation">
            <div class="confirmation__summary">
                <h3 class="section-title">"Confirm Exchange"</h3>
                {move || {
                    lines()
                        .into_iter()
                        .map(|(label, value)| {
                            view! {
                                <div class="summary-row">
                                    <span>{label}</span>
                                    <span class="summary-row__value">{value}</span>
                                </div>
                            }
                        })
                        .collect_view()
                }}
            </div>
            <div class="confirmation__actions">
                <button
                    class="button button--outline"
                    disabled=submitted
                    on:click=move |_| station.dispatch(Event::ConfirmCancelled)
                >
                    "Cancel"
                </button>
                <button
                    class="button button--primary"
                    disabled=submitted
                    on:click=move |_| station.dispatch(Event::SubmitRequested)
                >
                    "Confirm"
                </button>
            </div>
        </section>
    }
}
