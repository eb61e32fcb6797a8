//! Render tests using RenderHarness
//!
//! Each view state is rendered into a test buffer and checked as plain text.

use tui_dispatch::testing::*;
use clima::{
    components::{Component, WeatherDisplay, WeatherDisplayProps},
    error::{FailureCause, FetchFailure},
    state::{AppState, ForecastDay, ViewState, WeatherReport},
};

fn render_state(width: u16, height: u16, state: &AppState) -> String {
    let mut render = RenderHarness::new(width, height);
    let mut component = WeatherDisplay;
    render.render_to_string_plain(|frame| {
        let props = WeatherDisplayProps {
            state,
            is_focused: true,
        };
        component.render(frame, frame.area(), props);
    })
}

fn day(weekday: &str, date: &str, description: &str, min: f32, max: f32) -> ForecastDay {
    ForecastDay {
        weekday: weekday.into(),
        date: date.into(),
        description: description.into(),
        min,
        max,
    }
}

fn report(forecast: Vec<ForecastDay>) -> WeatherReport {
    WeatherReport {
        city: "Recife".into(),
        temp: 28.0,
        description: "sol".into(),
        humidity: 60,
        wind_speedy: "10 km/h".into(),
        sunrise: "05:30".into(),
        sunset: "17:45".into(),
        forecast,
    }
}

#[test]
fn test_render_loading_state() {
    let state = AppState::new("Recife,PE");
    let output = render_state(60, 24, &state);

    assert!(
        output.contains("Loading weather for Recife,PE"),
        "Should show loading label:\n{output}"
    );
}

#[test]
fn test_render_error_state() {
    let state = AppState {
        view: ViewState::Error(FetchFailure::new(FailureCause::Transport, "Network error")),
        ..Default::default()
    };
    let output = render_state(70, 20, &state);

    assert!(output.contains("Error"), "Should show error label");
    assert!(output.contains("Network error"), "Should show error message");
    assert!(output.contains("search another city"), "Should show search hint");
    assert!(
        !output.contains("temporary access"),
        "No relay hint without an access page:\n{output}"
    );
}

#[test]
fn test_render_error_with_relay_hint() {
    let state = AppState {
        view: ViewState::Error(FetchFailure::new(
            FailureCause::Status(403),
            "weather service responded with 403 Forbidden",
        )),
        ..AppState::default().with_relay_access_url(Some("https://relay.example/corsdemo".into()))
    };
    let output = render_state(80, 24, &state);

    assert!(output.contains("403 Forbidden"));
    assert!(output.contains("temporary access"), "Should offer remediation:\n{output}");
    assert!(output.contains("https://relay.example/corsdemo"));
    assert!(output.contains("relay access"), "Status bar shows the key:\n{output}");
}

#[test]
fn test_render_forecast_in_received_order() {
    let state = AppState {
        view: ViewState::Loaded(report(vec![
            day("Sex", "05/01", "chuva", 23.0, 29.0),
            day("Seg", "01/01", "nublado", 20.0, 27.0),
            day("Qua", "03/01", "tempestades", 21.0, 25.0),
        ])),
        ..Default::default()
    };
    let output = render_state(80, 30, &state);

    let positions: Vec<usize> = ["05/01", "01/01", "03/01"]
        .iter()
        .map(|date| output.find(date).unwrap_or_else(|| panic!("{date} missing:\n{output}")))
        .collect();
    assert!(
        positions.windows(2).all(|w| w[0] < w[1]),
        "Forecast must keep API order:\n{output}"
    );
}

fn ten_days() -> Vec<ForecastDay> {
    (0..10)
        .map(|i| day("Dia", &format!("{:02}/01", i + 1), &format!("cond-{i}"), 19.0, 26.0))
        .collect()
}

#[test]
fn test_render_full_forecast_on_standard_terminal() {
    let state = AppState {
        view: ViewState::Loaded(report(ten_days())),
        ..Default::default()
    };
    let output = render_state(80, 24, &state);

    for i in 0..10 {
        let cond = format!("cond-{i}");
        assert!(output.contains(&cond), "{cond} missing at 80x24:\n{output}");
    }
    assert!(!output.contains("more"), "nothing should be hidden:\n{output}");
    assert!(output.contains("28°C"), "temperature folds into the description:\n{output}");
}

#[test]
fn test_render_scrolled_forecast_shows_hidden_counts() {
    let state = AppState {
        view: ViewState::Loaded(report(ten_days())),
        forecast_scroll: 3,
        ..Default::default()
    };
    let output = render_state(80, 16, &state);

    assert!(!output.contains("cond-0"), "scrolled off the top:\n{output}");
    assert!(output.contains("cond-3") && output.contains("cond-7"));
    assert!(!output.contains("cond-9"));
    assert!(output.contains("↑ 3 more"), "missing indicator:\n{output}");
    assert!(output.contains("↓ 2 more"), "missing indicator:\n{output}");
}

#[test]
fn test_render_current_conditions() {
    let state = AppState {
        view: ViewState::Loaded(report(vec![day("Seg", "01/01", "nublado", 20.0, 27.0)])),
        ..Default::default()
    };
    let output = render_state(80, 30, &state);

    assert!(output.contains("Humidity"));
    assert!(output.contains("60%"));
    assert!(output.contains("Wind"));
    assert!(output.contains("10 km/h"));
    assert!(output.contains("Sunrise"));
    assert!(output.contains("05:30"));
    assert!(output.contains("Sunset"));
    assert!(output.contains("17:45"));
    assert!(output.contains("query Recife,PE"), "Should show the query:\n{output}");
}

#[test]
fn test_render_help_bar() {
    let state = AppState::default();
    let output = render_state(80, 24, &state);

    assert!(output.contains("search"), "Should show search hint");
    assert!(output.contains("reload"), "Should show reload hint");
    assert!(output.contains("quit"), "Should show quit hint");
}

#[test]
fn test_render_tiny_terminal_does_not_panic() {
    let state = AppState {
        view: ViewState::Loaded(report(vec![day("Seg", "01/01", "nublado", 20.0, 27.0)])),
        ..Default::default()
    };
    let output = render_state(20, 6, &state);
    assert!(!output.is_empty());
}
