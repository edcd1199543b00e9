//! Browser and environment helpers shared by the overlay.
//!
//! SYSTEM CONTEXT
//! ==============
//! These modules isolate page-level concerns (host detection, document
//! classes, repeating timers) from components so the rest of the crate stays
//! testable without a browser.

pub mod env;
pub mod theme;
pub mod timers;
