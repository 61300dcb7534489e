pub(crate) mod book_list;
pub(crate) mod charts;
pub(crate) mod controls;
pub(crate) mod detail;
pub(crate) mod stats;
pub(crate) mod statusbar;

use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::app::{App, CollectionState};
use crate::ui::centered_rect;

/// Render the dashboard view: header, stat cards, charts, controls, list.
pub fn render_dashboard(frame: &mut Frame, app: &App, area: Rect) {
    match &app.collection_state {
        CollectionState::Loading => {
            render_loading(frame, app, area);
            return;
        }
        CollectionState::Failed(message) => {
            render_load_error(frame, app, area, message);
            return;
        }
        CollectionState::Ready => {}
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // header
            Constraint::Length(5),  // stat cards
            Constraint::Length(12), // charts
            Constraint::Length(3),  // search / era / count
            Constraint::Min(4),     // book list
        ])
        .split(area);

    render_header(frame, app, chunks[0]);
    stats::render(frame, app, chunks[1]);
    charts::render(frame, app, chunks[2]);
    controls::render(frame, app, chunks[3]);
    book_list::render(frame, app, chunks[4]);
}

fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let header = Paragraph::new(vec![
        Line::from(Span::styled(
            "Open Library Book Dashboard",
            Style::default()
                .fg(app.theme.fg_bright())
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!(
                "Explore {} books from the Open Library collection",
                app.config.api.subject
            ),
            Style::default().fg(app.theme.muted()),
        )),
    ])
    .alignment(Alignment::Center)
    .block(Block::default().style(Style::default().bg(app.theme.bg())));
    frame.render_widget(header, area);
}

fn render_loading(frame: &mut Frame, app: &App, area: Rect) {
    let rect = centered_rect(40, 20, area);
    let msg = Paragraph::new("Loading books...")
        .alignment(Alignment::Center)
        .style(Style::default().fg(app.theme.frost_ice()))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(app.theme.border())),
        );
    frame.render_widget(msg, rect);
}

fn render_load_error(frame: &mut Frame, app: &App, area: Rect, message: &str) {
    let rect = centered_rect(60, 30, area);
    let lines = vec![
        Line::from(Span::styled(
            "Error Loading Books",
            Style::default()
                .fg(app.theme.red())
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            message.to_string(),
            Style::default().fg(app.theme.fg()),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "press r to retry, q to quit",
            Style::default().fg(app.theme.muted()),
        )),
    ];
    let msg = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(ratatui::widgets::Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(app.theme.red())),
        );
    frame.render_widget(msg, rect);
}
