use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::app::App;

/// Six summary stat cards in one row.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let cards: [(String, &str); 6] = [
        (app.stats.total_books.to_string(), "Total Books"),
        (app.stats.avg_editions.to_string(), "Avg Editions"),
        (app.stats.oldest_year.to_string(), "Oldest Year"),
        (app.stats.newest_year.to_string(), "Newest Year"),
        (app.stats.books_with_authors.to_string(), "With Authors"),
        (app.stats.total_authors.to_string(), "Author Credits"),
    ];

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 6); 6])
        .split(area);

    for ((value, label), chunk) in cards.iter().zip(chunks.iter()) {
        let card = Paragraph::new(vec![
            Line::from(Span::styled(
                value.clone(),
                Style::default()
                    .fg(app.theme.frost_ice())
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                *label,
                Style::default().fg(app.theme.muted()),
            )),
        ])
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(app.theme.border()))
                .style(Style::default().bg(app.theme.bg())),
        );
        frame.render_widget(card, *chunk);
    }
}
