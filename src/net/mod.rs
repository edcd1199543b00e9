//! Host communication: outbound NUI callbacks, inbound window messages, and
//! the dispatch loop tying both to the overlay state.

pub mod events;
pub mod host;
pub mod nui;
