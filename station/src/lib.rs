//! Domain model and state transitions for the recycling-station overlay.
//!
//! This crate owns everything the overlay decides on its own: the wire types
//! exchanged with the game host, the selection/confirmation flow, the local
//! batch countdown, the robbery guard, and the [`overlay::Overlay`] container
//! that ties them together. It has no browser dependencies so every
//! transition is testable natively; the Leptos shell only renders state and
//! executes the [`overlay::Command`]s returned by the reducer.

pub mod batches;
pub mod error;
pub mod events;
pub mod flow;
pub mod format;
pub mod mock;
pub mod model;
pub mod overlay;
pub mod pricing;
pub mod robbery;
mod wire;

pub use error::HostError;
pub use model::{Batch, ItemCategory, Material, OutputEntry, RecyclableItem, RecyclingData, RobberyConfig};
pub use overlay::{Command, Event, FallbackPolicy, Overlay, Tab};
