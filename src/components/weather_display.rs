use crossterm::event::KeyCode;
use ratatui::layout::{Constraint, Layout};
use ratatui::prelude::{Frame, Rect};
use tui_dispatch::EventKind;
use tui_dispatch_components::{
    StatusBar, StatusBarHint, StatusBarProps, StatusBarSection, StatusBarStyle,
};

use super::{Component, WeatherBody, WeatherBodyProps};
use crate::action::Action;
use crate::state::AppState;

pub const ERROR_ICON: &str = "\u{26a0}\u{fe0f}";

/// Props for WeatherDisplay - read-only view of state
pub struct WeatherDisplayProps<'a> {
    pub state: &'a AppState,
    pub is_focused: bool,
}

/// The weather screen: body for the current view plus the key hints
#[derive(Default)]
pub struct WeatherDisplay;

impl Component<Action> for WeatherDisplay {
    type Props<'a> = WeatherDisplayProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        if !props.is_focused {
            return None;
        }

        match event {
            EventKind::Key(key) => match key.code {
                KeyCode::Char('r') | KeyCode::F(5) => Some(Action::WeatherFetch),
                KeyCode::Char('/') => Some(Action::SearchOpen),
                KeyCode::Char('o') if props.state.view.is_error() => {
                    Some(Action::RelayAccessOpen)
                }
                KeyCode::Down | KeyCode::Char('j') if props.state.view.is_loaded() => {
                    Some(Action::ForecastScroll(1))
                }
                KeyCode::Up | KeyCode::Char('k') if props.state.view.is_loaded() => {
                    Some(Action::ForecastScroll(-1))
                }
                KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
                _ => None,
            },
            _ => None,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: WeatherDisplayProps<'_>) {
        let chunks = Layout::vertical([
            Constraint::Min(1),    // Main content
            Constraint::Length(1), // Help bar
        ])
        .split(area);

        let mut body = WeatherBody;
        body.render(frame, chunks[0], WeatherBodyProps { state: props.state });

        let mut hints = vec![
            StatusBarHint::new("/", "search"),
            StatusBarHint::new("r", "reload"),
        ];
        if props.state.view.is_loaded() {
            hints.push(StatusBarHint::new("j/k", "forecast"));
        }
        if props.state.view.is_error() && props.state.relay_access_url.is_some() {
            hints.push(StatusBarHint::new("o", "relay access"));
        }
        hints.push(StatusBarHint::new("q", "quit"));

        let mut status_bar = StatusBar::new();
        <StatusBar as Component<Action>>::render(
            &mut status_bar,
            frame,
            chunks[1],
            StatusBarProps {
                left: StatusBarSection::empty(),
                center: StatusBarSection::hints(&hints),
                right: StatusBarSection::empty(),
                style: StatusBarStyle::default(),
                is_focused: false,
            },
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{FailureCause, FetchFailure};
    use crate::state::ViewState;
    use tui_dispatch::testing::*;

    fn actions_for(state: &AppState, keys: &str, is_focused: bool) -> Vec<Action> {
        let mut component = WeatherDisplay;
        let props = WeatherDisplayProps { state, is_focused };
        component
            .handle_event(&EventKind::Key(key(keys)), props)
            .into_iter()
            .collect()
    }

    #[test]
    fn test_handle_event_reload() {
        let state = AppState::default();
        let actions = actions_for(&state, "r", true);
        actions.assert_count(1);
        actions.assert_first(Action::WeatherFetch);
    }

    #[test]
    fn test_handle_event_search_and_quit() {
        let state = AppState::default();
        actions_for(&state, "/", true).assert_first(Action::SearchOpen);
        actions_for(&state, "q", true).assert_first(Action::Quit);
    }

    #[test]
    fn test_relay_key_only_in_error_state() {
        let state = AppState::default();
        actions_for(&state, "o", true).assert_empty();

        let state = AppState {
            view: ViewState::Error(FetchFailure::new(FailureCause::Status(403), "forbidden")),
            ..Default::default()
        };
        actions_for(&state, "o", true).assert_first(Action::RelayAccessOpen);
    }

    #[test]
    fn test_scroll_keys_only_with_a_report() {
        let state = AppState::default();
        actions_for(&state, "j", true).assert_empty();

        let state = AppState {
            view: ViewState::Loaded(Default::default()),
            ..Default::default()
        };
        actions_for(&state, "j", true).assert_first(Action::ForecastScroll(1));
        actions_for(&state, "down", true).assert_first(Action::ForecastScroll(1));
        actions_for(&state, "k", true).assert_first(Action::ForecastScroll(-1));
    }

    #[test]
    fn test_handle_event_unfocused_ignores() {
        let state = AppState::default();
        actions_for(&state, "r", false).assert_empty();
    }

    #[test]
    fn test_render_loading() {
        let mut render = RenderHarness::new(60, 24);
        let mut component = WeatherDisplay;
        let state = AppState::new("Olinda,PE");

        let output = render.render_to_string_plain(|frame| {
            let props = WeatherDisplayProps {
                state: &state,
                is_focused: true,
            };
            component.render(frame, frame.area(), props);
        });

        assert!(output.contains("Loading weather for Olinda,PE"));
        assert!(output.contains("search"));
    }
}
