//! Reducer - pure function: (state, action) -> DispatchResult

use tui_dispatch::DispatchResult;

use crate::action::Action;
use crate::effect::Effect;
use crate::state::{AppState, ViewState};

/// The reducer handles all state transitions
pub fn reducer(state: &mut AppState, action: Action) -> DispatchResult<Effect> {
    match action {
        // ===== Weather actions =====
        Action::WeatherFetch => begin_fetch(state),

        Action::WeatherDidLoad { seq, report } => {
            if seq != state.request_seq {
                return DispatchResult::unchanged();
            }
            state.view = ViewState::Loaded(report);
            state.forecast_scroll = 0;
            DispatchResult::changed()
        }

        Action::WeatherDidError { seq, failure } => {
            if seq != state.request_seq {
                return DispatchResult::unchanged();
            }
            state.view = ViewState::Error(failure);
            DispatchResult::changed()
        }

        // ===== Query actions =====
        Action::QuerySubmit(text) => {
            let query = text.trim();
            if query.is_empty() {
                return DispatchResult::unchanged();
            }
            state.query = query.to_string();
            state.search_mode = false;
            state.search_input.clear();
            begin_fetch(state)
        }

        // ===== Search actions =====
        Action::SearchOpen => {
            state.search_mode = true;
            state.search_input.clear();
            DispatchResult::changed()
        }

        Action::SearchClose => {
            if !state.search_mode {
                return DispatchResult::unchanged();
            }
            state.search_mode = false;
            state.search_input.clear();
            DispatchResult::changed()
        }

        Action::SearchInputChange(text) => {
            state.search_input = text;
            DispatchResult::changed()
        }

        // ===== Forecast actions =====
        Action::ForecastScroll(delta) => {
            let Some(report) = state.view.report() else {
                return DispatchResult::unchanged();
            };
            let last = report.forecast.len().saturating_sub(1).min(usize::from(u16::MAX));
            let next = (i64::from(state.forecast_scroll) + i64::from(delta)).clamp(0, last as i64);
            let next = next as u16;
            if next == state.forecast_scroll {
                return DispatchResult::unchanged();
            }
            state.forecast_scroll = next;
            DispatchResult::changed()
        }

        // ===== Relay actions =====
        // Opening the page leaves the state alone; only the effect goes out.
        Action::RelayAccessOpen => match (&state.view, &state.relay_access_url) {
            (ViewState::Error(_), Some(url)) => {
                DispatchResult::effect(Effect::OpenUrl(url.clone()))
            }
            _ => DispatchResult::unchanged(),
        },

        // ===== Global actions =====
        Action::Render => DispatchResult::changed(),

        Action::Tick => {
            if state.view.is_loading() {
                state.spinner_frame = state.spinner_frame.wrapping_add(1);
                DispatchResult::changed()
            } else {
                DispatchResult::unchanged()
            }
        }

        Action::Quit => DispatchResult::unchanged(),
    }
}

/// Enter `Loading` for the current query and issue exactly one fetch.
fn begin_fetch(state: &mut AppState) -> DispatchResult<Effect> {
    state.request_seq = state.request_seq.wrapping_add(1);
    state.view = ViewState::Loading;
    state.spinner_frame = 0;
    DispatchResult::changed_with(Effect::FetchWeather {
        seq: state.request_seq,
        query: state.query.clone(),
    })
}
