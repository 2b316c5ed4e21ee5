//! Weather widget - current conditions for a city in the terminal
//!
//! This library exposes the widget's modules for the binary and tests.

pub mod action;
pub mod api;
pub mod components;
pub mod config;
pub mod effect;
pub mod i18n;
pub mod logging;
pub mod reducer;
pub mod state;
pub mod theme;
