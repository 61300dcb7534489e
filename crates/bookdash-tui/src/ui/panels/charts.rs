use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{BarChart, Block, Borders, Paragraph};
use ratatui::Frame;

use crate::app::App;

/// Two charts side by side: decade histogram and edition-count ranges.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    render_decades(frame, app, chunks[0]);
    render_edition_ranges(frame, app, chunks[1]);
}

fn render_decades(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Books by Decade ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.border()))
        .style(Style::default().bg(app.theme.bg()));

    if app.decades.is_empty() {
        let empty = Paragraph::new(Line::from(Span::styled(
            "  no dated books",
            Style::default().fg(app.theme.muted()),
        )))
        .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let labels: Vec<String> = app.decades.iter().map(|d| d.label()).collect();
    let data: Vec<(&str, u64)> = labels
        .iter()
        .zip(&app.decades)
        .map(|(label, bucket)| (label.as_str(), u64::from(bucket.count)))
        .collect();

    let chart = BarChart::default()
        .block(block)
        .data(data.as_slice())
        .bar_width(5)
        .bar_gap(1)
        .bar_style(Style::default().fg(app.theme.chart_bar()))
        .value_style(
            Style::default()
                .fg(app.theme.bg())
                .bg(app.theme.chart_bar())
                .add_modifier(Modifier::BOLD),
        )
        .label_style(Style::default().fg(app.theme.muted()));
    frame.render_widget(chart, area);
}

fn render_edition_ranges(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Edition Count Distribution ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.border()))
        .style(Style::default().bg(app.theme.bg()));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let total: u32 = app.edition_ranges.iter().map(|r| r.value).sum();
    let max = app
        .edition_ranges
        .iter()
        .map(|r| r.value)
        .max()
        .unwrap_or(0);
    let bar_width = inner.width.saturating_sub(22) as u32;

    let mut lines = Vec::new();
    for bucket in &app.edition_ranges {
        let filled = if max == 0 {
            0
        } else {
            (bucket.value * bar_width) / max
        };
        let percent = if total == 0 {
            0
        } else {
            (bucket.value * 100) / total
        };
        lines.push(Line::from(vec![
            Span::styled(
                format!(" {:<7}", bucket.range),
                Style::default().fg(app.theme.fg()),
            ),
            Span::styled(
                "█".repeat(filled as usize),
                Style::default().fg(app.theme.frost_mint()),
            ),
            Span::styled(
                format!(" {} ({percent}%)", bucket.value),
                Style::default().fg(app.theme.muted()),
            ),
        ]));
        lines.push(Line::from(""));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}
