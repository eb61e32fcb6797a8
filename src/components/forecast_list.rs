use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Paragraph},
};

use super::Component;
use crate::action::Action;
use crate::state::{ForecastDay, format_temp};

/// Forecast rows in the order the API returned them
pub struct ForecastList;

pub struct ForecastListProps<'a> {
    pub days: &'a [ForecastDay],
    /// Index of the first day to show; clamped so the box never ends half empty
    pub scroll: u16,
}

const DESCRIPTION_WIDTH: usize = 22;

fn day_line(day: &ForecastDay) -> Line<'static> {
    let description: String = day.description.chars().take(DESCRIPTION_WIDTH).collect();
    Line::from(vec![
        Span::styled(format!(" {:<4}", day.weekday), Style::default().bold()),
        Span::styled(format!("{:<6}", day.date), Style::default().fg(Color::DarkGray)),
        Span::raw("  "),
        Span::styled(
            format!("{:<width$}", description, width = DESCRIPTION_WIDTH),
            Style::default().fg(Color::Gray),
        ),
        Span::styled("min ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            format!("{:<7}", format_temp(day.min)),
            Style::default().fg(Color::Rgb(52, 152, 219)).bold(),
        ),
        Span::styled("max ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            format_temp(day.max),
            Style::default().fg(Color::Rgb(231, 76, 60)).bold(),
        ),
    ])
}

/// "↑ 2 more  ↓ 5 more" for days scrolled out of the box
fn overflow_line(above: usize, below: usize) -> Option<Line<'static>> {
    let style = Style::default().fg(Color::Cyan);
    let mut spans = Vec::new();
    if above > 0 {
        spans.push(Span::styled(format!(" ↑ {above} more "), style));
    }
    if below > 0 {
        spans.push(Span::styled(format!(" ↓ {below} more "), style));
    }
    if spans.is_empty() {
        None
    } else {
        Some(Line::from(spans).right_aligned())
    }
}

impl Component<Action> for ForecastList {
    type Props<'a> = ForecastListProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let mut block = Block::bordered()
            .title(" Forecast ")
            .border_style(Style::default().fg(Color::DarkGray));

        let visible = usize::from(area.height.saturating_sub(2));
        let total = props.days.len();
        let start = usize::from(props.scroll).min(total.saturating_sub(visible));
        let end = (start + visible).min(total);
        if let Some(hidden) = overflow_line(start, total - end) {
            block = block.title_bottom(hidden);
        }

        let lines: Vec<Line> = if props.days.is_empty() {
            vec![Line::from(Span::styled(
                " No forecast available",
                Style::default().fg(Color::DarkGray),
            ))]
        } else {
            props.days[start..end].iter().map(day_line).collect()
        };

        frame.render_widget(Paragraph::new(lines).block(block), area);
    }
}
