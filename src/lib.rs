//! # recycler-nui
//!
//! Leptos + WASM overlay for the recycling station, rendered inside the game
//! client's embedded browser.
//!
//! All decisions live in the `station` crate's reducer; this crate renders
//! its state, forwards user input and host messages as events, and executes
//! the host calls the reducer asks for. Browser APIs are gated behind the
//! `csr` feature so the crate also builds and tests natively.

pub mod app;
pub mod components;
pub mod net;
pub mod util;
