//! clima - current weather and forecast TUI for HG Brasil
//!
//! This library exposes the application's modules for testing.

pub mod action;
pub mod api;
pub mod components;
pub mod config;
pub mod effect;
pub mod error;
pub mod reducer;
pub mod state;
