//! Actions: user intents and async results

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::FetchFailure;
use crate::state::WeatherReport;

/// Application actions with automatic category inference
#[derive(tui_dispatch::Action, Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[action(infer_categories)]
pub enum Action {
    // ===== Weather category =====
    /// Intent: re-drive the current query (mount, manual reload)
    WeatherFetch,

    /// Result: report for the fetch stamped with `seq`
    WeatherDidLoad { seq: u64, report: WeatherReport },

    /// Result: the fetch stamped with `seq` failed
    WeatherDidError { seq: u64, failure: FetchFailure },

    // ===== Query category =====
    /// Submit a city; blank text is ignored
    QuerySubmit(String),

    // ===== Search category =====
    /// Open city input overlay
    SearchOpen,

    /// Close the overlay without submitting
    SearchClose,

    /// Input text changed
    SearchInputChange(String),

    // ===== Forecast category =====
    /// Scroll the forecast list by rows (negative scrolls up)
    ForecastScroll(i16),

    // ===== Relay category =====
    /// Open the relay's temporary-access page (error state only)
    RelayAccessOpen,

    // ===== Uncategorized (global) =====
    /// Force a re-render (cursor movement)
    Render,

    /// Periodic tick for the spinner
    Tick,

    /// Exit the application
    Quit,
}
