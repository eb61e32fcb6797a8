//! Application state - single source of truth

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::FetchFailure;

/// City used on startup when none is given on the command line.
pub const DEFAULT_CITY: &str = "Recife,PE";

/// Spinner animation timing.
pub const SPINNER_TICK_MS: u64 = 80;
pub const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// One day of the multi-day forecast
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ForecastDay {
    pub weekday: String,
    pub date: String,
    pub description: String,
    pub min: f32,
    pub max: f32,
}

/// Current conditions plus forecast, replaced wholesale on every successful fetch
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct WeatherReport {
    pub city: String,
    pub temp: f32,
    pub description: String,
    pub humidity: u8,
    pub wind_speedy: String,
    pub sunrise: String,
    pub sunset: String,
    /// Kept in the order the API returned it.
    pub forecast: Vec<ForecastDay>,
}

/// What the screen is showing. Exactly one variant is active at a time.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub enum ViewState {
    #[default]
    Loading,
    Error(FetchFailure),
    Loaded(WeatherReport),
}

impl ViewState {
    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }

    pub fn is_error(&self) -> bool {
        matches!(self, ViewState::Error(_))
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, ViewState::Loaded(_))
    }

    pub fn report(&self) -> Option<&WeatherReport> {
        match self {
            ViewState::Loaded(report) => Some(report),
            _ => None,
        }
    }

    pub fn failure(&self) -> Option<&FetchFailure> {
        match self {
            ViewState::Error(failure) => Some(failure),
            _ => None,
        }
    }
}

/// Format a Celsius value the way the API reports it: whole degrees stay whole.
pub fn format_temp(celsius: f32) -> String {
    if celsius.fract() == 0.0 {
        format!("{:.0}°C", celsius)
    } else {
        format!("{:.1}°C", celsius)
    }
}

/// Application state - everything the UI needs to render
#[derive(Clone, Debug, tui_dispatch::DebugState, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppState {
    /// City string driving the current fetch
    #[debug(section = "Query", label = "City")]
    pub query: String,

    /// Loading → Loaded/Error, back to Loading on every submission
    #[debug(section = "Weather", label = "View", debug_fmt)]
    pub view: ViewState,

    /// Ticket of the most recently issued fetch; older results are dropped
    #[debug(section = "Weather", label = "Ticket")]
    pub request_seq: u64,

    /// Page that grants temporary access to the relay, if one is configured
    #[debug(section = "Relay", label = "Access page", debug_fmt)]
    pub relay_access_url: Option<String>,

    /// First forecast row shown when the list is taller than its box
    #[debug(section = "Weather", label = "Forecast scroll")]
    pub forecast_scroll: u16,

    #[debug(skip)]
    pub spinner_frame: u32,

    // --- Search mode (skipped) ---
    #[debug(skip)]
    pub search_mode: bool,

    #[debug(skip)]
    pub search_input: String,
}

impl AppState {
    /// Create state for the given starting city
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            view: ViewState::Loading,
            request_seq: 0,
            relay_access_url: None,
            forecast_scroll: 0,
            spinner_frame: 0,
            search_mode: false,
            search_input: String::new(),
        }
    }

    pub fn with_relay_access_url(mut self, url: Option<String>) -> Self {
        self.relay_access_url = url;
        self
    }

    pub fn spinner(&self) -> &'static str {
        SPINNER_FRAMES[self.spinner_frame as usize % SPINNER_FRAMES.len()]
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(DEFAULT_CITY)
    }
}
