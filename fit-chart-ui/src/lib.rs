//! Shared Dioxus components and D3.js bridge for the dashboard.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for D3.js chart functions via `js_sys::eval()`
//! - `state`: Reactive AppState with Dioxus Signals
//! - `components`: Reusable RSX components (tabs, year selector, containers, etc.)
//! - `location`: URL fragment helpers for the selected tab

pub mod js_bridge;
pub mod state;
pub mod components;
pub mod location;
