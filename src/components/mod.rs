//! Overlay UI components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read the shared [`crate::net::host::Station`] from context and
//! only ever change state by dispatching events. Display derivations live in
//! plain functions next to each component so they test without a DOM.

pub mod amount_select;
pub mod batch_list;
pub mod confirmation;
pub mod item_list;
pub mod robbery_notice;
pub mod station_card;
pub mod station_header;
