use artbox::{Alignment as ArtAlignment, Renderer, integrations::ratatui::ArtBox};
use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::city_header::{HEADER_OVERHEAD, font_stack, temperature_fill};
use super::{CityHeader, CityHeaderProps, Component, ERROR_ICON, ForecastList, ForecastListProps};
use crate::action::Action;
use crate::error::FetchFailure;
use crate::state::{AppState, ViewState, WeatherReport, format_temp};

pub struct WeatherBody;

pub struct WeatherBodyProps<'a> {
    pub state: &'a AppState,
}

/// terminus is 6 rows tall; smaller areas fall back to miniwi or plain text.
const HEADER_CAP: u16 = 6 + HEADER_OVERHEAD;
const TEMP_CAP: u16 = 6;
/// Plain city name plus the query line.
const HEADER_MIN: u16 = HEADER_OVERHEAD + 1;
/// Description, details and the blank rows around them.
const DETAILS_ROWS: u16 = 5;

// ============================================================================
// Component
// ============================================================================

impl Component<Action> for WeatherBody {
    type Props<'a> = WeatherBodyProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let state = props.state;
        match &state.view {
            ViewState::Loading => render_loading(frame, area, state),
            ViewState::Error(failure) => render_error(frame, area, state, failure),
            ViewState::Loaded(report) => render_loaded(frame, area, state, report),
        }
    }
}

fn render_header(frame: &mut Frame, area: Rect, name: &str, state: &AppState) {
    let mut header = CityHeader;
    header.render(
        frame,
        area,
        CityHeaderProps {
            name,
            query: &state.query,
            temperature: state.view.report().map(|r| r.temp),
        },
    );
}

fn render_loading(frame: &mut Frame, area: Rect, state: &AppState) {
    let chunks = Layout::vertical([
        Constraint::Max(HEADER_CAP),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .flex(Flex::Center)
    .split(area);

    render_header(frame, chunks[0], &state.query, state);

    let msg = Line::from(vec![
        Span::styled(state.spinner(), Style::default().fg(Color::Rgb(74, 144, 226))),
        Span::styled(
            format!(" Loading weather for {}...", state.query),
            Style::default().fg(Color::DarkGray),
        ),
    ])
    .centered();
    frame.render_widget(Paragraph::new(msg), chunks[2]);
}

fn render_loaded(frame: &mut Frame, area: Rect, state: &AppState, report: &WeatherReport) {
    // Borders plus one row per day, or the empty notice
    let forecast_rows = u16::try_from(report.forecast.len())
        .unwrap_or(u16::MAX)
        .max(1)
        .saturating_add(2);
    let below_header = DETAILS_ROWS.saturating_add(forecast_rows);
    let roomy = area.height >= (HEADER_CAP + TEMP_CAP).saturating_add(below_header);
    // When space is short the forecast wins: the header shrinks and the big
    // temperature folds into the description line.
    let (header_rows, temp_rows) = if roomy {
        (HEADER_CAP, TEMP_CAP)
    } else {
        let spare = area.height.saturating_sub(below_header);
        (spare.clamp(HEADER_MIN, HEADER_CAP), 0)
    };

    let chunks = Layout::vertical([
        Constraint::Length(header_rows),
        Constraint::Length(temp_rows),
        Constraint::Length(1), // description
        Constraint::Length(1), // blank
        Constraint::Length(2), // details
        Constraint::Length(1), // blank
        Constraint::Min(3),    // forecast
    ])
    .split(area);

    render_header(frame, chunks[0], &report.city, state);

    let desc_style = Style::default().fg(Color::Rgb(74, 144, 226));
    let desc = if temp_rows > 0 {
        let renderer = Renderer::new(font_stack())
            .with_plain_fallback()
            .with_alignment(ArtAlignment::Center)
            .with_fill(temperature_fill(Some(report.temp)));
        frame.render_widget(ArtBox::new(&renderer, &format_temp(report.temp)), chunks[1]);
        Line::from(vec![Span::styled(report.description.to_string(), desc_style)])
    } else {
        Line::from(vec![
            Span::styled(format_temp(report.temp), desc_style.bold()),
            Span::styled(format!("  {}", report.description), desc_style),
        ])
    };
    frame.render_widget(Paragraph::new(desc.centered()), chunks[2]);

    let details = vec![
        detail_line(&[
            ("Humidity", format!("{}%", report.humidity)),
            ("Wind", report.wind_speedy.clone()),
        ]),
        detail_line(&[
            ("Sunrise", report.sunrise.clone()),
            ("Sunset", report.sunset.clone()),
        ]),
    ];
    frame.render_widget(Paragraph::new(details), chunks[4]);

    let mut forecast = ForecastList;
    forecast.render(
        frame,
        chunks[6],
        ForecastListProps {
            days: &report.forecast,
            scroll: state.forecast_scroll,
        },
    );
}

fn detail_line(items: &[(&str, String)]) -> Line<'static> {
    let mut spans = Vec::with_capacity(items.len() * 3);
    for (i, (label, value)) in items.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("    "));
        }
        spans.push(Span::styled(
            format!("{label} "),
            Style::default().fg(Color::DarkGray),
        ));
        spans.push(Span::styled(value.clone(), Style::default().bold()));
    }
    Line::from(spans).centered()
}

fn render_error(frame: &mut Frame, area: Rect, state: &AppState, failure: &FetchFailure) {
    let mut hints = vec![key_hint("/", " to search another city")];
    if let Some(url) = &state.relay_access_url {
        let note = if failure.is_access_denied() {
            "The relay refused the request. "
        } else {
            "If the relay blocked the request, "
        };
        hints.push(Line::from(vec![
            Span::styled(note, Style::default().fg(Color::DarkGray)),
            Span::styled("o", Style::default().fg(Color::Cyan).bold()),
            Span::styled(" requests temporary access", Style::default().fg(Color::DarkGray)),
        ]));
        hints.push(Line::from(Span::styled(
            url.clone(),
            Style::default().fg(Color::DarkGray).underlined(),
        )));
    }

    let mut constraints = vec![
        Constraint::Length(1), // icon
        Constraint::Length(1), // "Error"
        Constraint::Length(1), // message
        Constraint::Length(1), // blank
    ];
    constraints.extend(hints.iter().map(|_| Constraint::Length(1)));
    let chunks = Layout::vertical(constraints).flex(Flex::Center).split(area);

    frame.render_widget(
        Paragraph::new(Line::from(ERROR_ICON).centered()),
        chunks[0],
    );
    frame.render_widget(
        Paragraph::new(
            Line::from(vec![Span::styled(
                format!("Error loading {}", state.query),
                Style::default().fg(Color::Red).bold(),
            )])
            .centered(),
        ),
        chunks[1],
    );
    frame.render_widget(
        Paragraph::new(
            Line::from(vec![Span::styled(
                failure.message.clone(),
                Style::default().fg(Color::Rgb(231, 76, 60)),
            )])
            .centered(),
        ),
        chunks[2],
    );
    for (hint, chunk) in hints.into_iter().zip(chunks.iter().skip(4)) {
        frame.render_widget(Paragraph::new(hint.centered()), *chunk);
    }
}

fn key_hint(key: &'static str, text: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled("Press ", Style::default().fg(Color::DarkGray)),
        Span::styled(key, Style::default().fg(Color::Cyan).bold()),
        Span::styled(text, Style::default().fg(Color::DarkGray)),
    ])
}
