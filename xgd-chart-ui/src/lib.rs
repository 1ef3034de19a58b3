//! Shared Dioxus components and state for the shot dashboard.
//!
//! This crate provides:
//! - `state`: Reactive AppState with Dioxus Signals
//! - `components`: Reusable RSX components (selectors, notices, etc.)

pub mod components;
pub mod state;
