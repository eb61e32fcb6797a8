use artbox::{
    Alignment as ArtAlignment, Color as ArtColor, Fill, LinearGradient, Renderer, fonts,
    integrations::ratatui::ArtBox,
};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::Component;
use crate::action::Action;

/// Big city name plus the query that produced it
pub struct CityHeader;

pub struct CityHeaderProps<'a> {
    pub name: &'a str,
    pub query: &'a str,
    pub temperature: Option<f32>,
}

/// Overhead inside the header area: 1 spacer + 1 query line.
/// The FIGlet city name gets `area.height - HEADER_OVERHEAD`.
pub const HEADER_OVERHEAD: u16 = 2;

pub fn font_stack() -> Vec<artbox::Font> {
    fonts::stack(&["terminus", "miniwi"])
}

/// Horizontal gradient keyed on temperature; gray when there is no reading yet.
pub fn temperature_fill(temp: Option<f32>) -> Fill {
    let (start, end) = match temp {
        Some(t) if t < 0.0 => (
            ArtColor::rgb(150, 200, 255), // Ice blue
            ArtColor::rgb(200, 230, 255), // Light ice
        ),
        Some(t) if t < 15.0 => (
            ArtColor::rgb(100, 180, 255), // Cool blue
            ArtColor::rgb(150, 220, 200), // Teal
        ),
        Some(t) if t < 25.0 => (
            ArtColor::rgb(100, 200, 150), // Green
            ArtColor::rgb(255, 220, 100), // Yellow
        ),
        Some(t) if t < 35.0 => (
            ArtColor::rgb(255, 180, 80), // Orange
            ArtColor::rgb(255, 120, 80), // Deep orange
        ),
        Some(_) => (
            ArtColor::rgb(255, 100, 80), // Red-orange
            ArtColor::rgb(255, 60, 60),  // Hot red
        ),
        None => (
            ArtColor::rgb(180, 180, 180), // Gray (no data)
            ArtColor::rgb(220, 220, 220),
        ),
    };
    Fill::Linear(LinearGradient::horizontal(start, end))
}

impl Component<Action> for CityHeader {
    type Props<'a> = CityHeaderProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let chunks = Layout::vertical([
            Constraint::Fill(1),   // FIGlet city name, artbox picks the font
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Query
        ])
        .split(area);

        let renderer = Renderer::new(font_stack())
            .with_plain_fallback()
            .with_alignment(ArtAlignment::Center)
            .with_fill(temperature_fill(props.temperature));
        frame.render_widget(ArtBox::new(&renderer, props.name), chunks[0]);

        let query_line = Line::from(vec![
            Span::styled("query ", Style::default().fg(Color::DarkGray)),
            Span::styled(props.query.to_string(), Style::default().fg(Color::Gray)),
        ])
        .centered();
        frame.render_widget(Paragraph::new(query_line), chunks[2]);
    }
}
