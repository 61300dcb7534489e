use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::app::{App, Mode};

/// Search input, era selector and result count.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(50),
            Constraint::Percentage(28),
            Constraint::Percentage(22),
        ])
        .split(area);

    render_search(frame, app, chunks[0]);
    render_era(frame, app, chunks[1]);
    render_count(frame, app, chunks[2]);
}

fn render_search(frame: &mut Frame, app: &App, area: Rect) {
    let is_active = app.mode == Mode::Search;
    let border_color = if is_active {
        app.theme.active_panel()
    } else {
        app.theme.border()
    };

    let content = if app.search_input.is_empty() && !is_active {
        Line::from(Span::styled(
            "press / to search by title or author",
            Style::default().fg(app.theme.muted()),
        ))
    } else {
        let cursor = if is_active { "▏" } else { "" };
        Line::from(vec![
            Span::styled("/ ", Style::default().fg(app.theme.yellow())),
            Span::styled(
                format!("{}{cursor}", app.search_input),
                Style::default().fg(app.theme.fg_bright()),
            ),
        ])
    };

    let search = Paragraph::new(content).block(
        Block::default()
            .title(" Search ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color)),
    );
    frame.render_widget(search, area);
}

fn render_era(frame: &mut Frame, app: &App, area: Rect) {
    let era = Paragraph::new(Line::from(vec![Span::styled(
        app.era.label(),
        Style::default()
            .fg(app.theme.frost_mint())
            .add_modifier(Modifier::BOLD),
    )]))
    .block(
        Block::default()
            .title(" Era (e) ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(app.theme.border())),
    );
    frame.render_widget(era, area);
}

fn render_count(frame: &mut Frame, app: &App, area: Rect) {
    let count = Paragraph::new(Line::from(Span::styled(
        format!("{} of {} books", app.books.len(), app.all_books.len()),
        Style::default().fg(app.theme.muted()),
    )))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(app.theme.border())),
    );
    frame.render_widget(count, area);
}
