//! Processing status: one card per batch with its local countdown,
//! collect action for the player's finished batches, and the hack action
//! for other players' running ones.

#[cfg(test)]
#[path = "batch_list_test.rs"]
mod batch_list_test;

use leptos::prelude::*;
use station::batches::TrackedBatch;
use station::format;
use station::{Event, Overlay};

use crate::components::robbery_notice::RobberyNotice;
use crate::net::host::Station;

/// Action button offered on a batch card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BatchAction {
    None,
    Collect,
    /// Hack button; `enabled` is false while any robbery is pending or the
    /// player lacks the hack item.
    Rob { enabled: bool, hacking: bool },
}

/// Snapshot of everything a batch card renders.
#[derive(Clone, Debug, PartialEq)]
pub struct BatchCard {
    pub id: u32,
    pub title: String,
    pub owner_label: &'static str,
    pub owner_icon: &'static str,
    pub amount: String,
    pub completed: bool,
    pub remaining: String,
    pub progress: f64,
    pub action: BatchAction,
}

pub fn action(overlay: &Overlay, batch: &TrackedBatch) -> BatchAction {
    let robbery_enabled = overlay.snapshot.as_ref().is_some_and(|data| data.robbery_config.enabled);
    if batch.reported.is_owner && batch.echo_completed {
        BatchAction::Collect
    } else if !batch.reported.is_owner && !batch.echo_completed && robbery_enabled {
        BatchAction::Rob {
            enabled: overlay.can_rob(batch.id()),
            hacking: overlay.robbery.robbing_batch() == Some(batch.id()),
        }
    } else {
        BatchAction::None
    }
}

pub fn card(overlay: &Overlay, batch: &TrackedBatch) -> BatchCard {
    let title = overlay
        .snapshot
        .as_ref()
        .map_or_else(|| batch.reported.item.clone(), |data| data.batch_label(&batch.reported));
    let (owner_label, owner_icon) = if batch.reported.is_owner {
        ("Your Batch", "fas fa-lock")
    } else {
        ("Other Player's Batch", "fas fa-users")
    };
    BatchCard {
        id: batch.id(),
        title,
        owner_label,
        owner_icon,
        amount: format!("Amount: {} units", batch.reported.amount),
        completed: batch.echo_completed,
        remaining: format!("{} remaining", format::time_remaining(batch.echo_time_left)),
        progress: batch.progress_percent(),
        action: action(overlay, batch),
    }
}

pub fn cards(overlay: &Overlay) -> Vec<BatchCard> {
    overlay.batches.items().iter().map(|batch| card(overlay, batch)).collect()
}

#[component]
pub fn BatchList() -> impl IntoView {
    let station = expect_context::<Station>();
    let overlay = station.overlay;
    let cards = move || overlay.with(cards);

    view! {
        <section class="batch-list">
            <RobberyNotice />
            {move || {
                let cards = cards();
                if cards.is_empty() {
                    return view! {
                        <div class="empty-state">
                            <i class="fas fa-info-circle"></i>
                            <p>"No active batches found."</p>
                        </div>
                    }
                    .into_any();
                }
                cards.into_iter().map(|card| view! { <BatchCardView card=card /> }).collect_view().into_any()
            }}
        </section>
    }
}

#[component]
fn BatchCardView(card: BatchCard) -> impl IntoView {
    let station = expect_context::<Station>();
    let id = card.id;
    let status = if card.completed {
        view! { <span class="badge badge--success">"Completed"</span> }.into_any()
    } else {
        view! { <span class="badge badge--warning">"Processing"</span> }.into_any()
    };
    let progress = (!card.completed).then(|| {
        view! {
            <div class="batch-card__progress">
                <div class="summary-row summary-row--small">
                    <span>"Progress"</span>
                    <span>{card.remaining.clone()}</span>
                </div>
                <div class="progress">
                    <div class="progress__fill" style=format!("width: {}", format::percent(card.progress))></div>
                </div>
            </div>
        }
    });
    let action = match card.action {
        BatchAction::None => None,
        BatchAction::Collect => Some(
            view! {
                <button
                    class="button button--primary button--wide"
                    on:click=move |_| station.dispatch(Event::CollectRequested(id))
                >
                    "Collect Batch"
                </button>
            }
            .into_any(),
        ),
        BatchAction::Rob { enabled, hacking } => Some(
            view! {
                <button
                    class="button button--destructive button--wide"
                    disabled=!enabled
                    on:click=move |_| station.dispatch(Event::RobRequested(id))
                >
                    {if hacking {
                        view! { <span class="pulse">"Hacking..."</span> }.into_any()
                    } else {
                        view! {
                            <i class="fas fa-laptop-code"></i>
                            " Attempt to Hack"
                        }
                        .into_any()
                    }}
                </button>
            }
            .into_any(),
        ),
    };

    view! {
        <article class="batch-card">
            <div class="batch-card__head">
                <div>
                    <h4 class="batch-card__title">{card.title}</h4>
                    <div class="batch-card__meta">
                        <div>
                            <i class=card.owner_icon></i>
                            " "
                            <span>{card.owner_label}</span>
                        </div>
                        <div>{card.amount}</div>
                    </div>
                </div>
                {status}
            </div>
            {progress}
            {action}
        </article>
    }
}
