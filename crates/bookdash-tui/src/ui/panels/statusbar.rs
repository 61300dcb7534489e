use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::{App, Mode, View};

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(35), // left zone: app / era
            Constraint::Percentage(25), // center: status message
            Constraint::Length(10),     // mode
            Constraint::Min(20),        // right zone: key hints
        ])
        .split(area);

    render_left_zone(frame, app, chunks[0]);
    render_center_zone(frame, app, chunks[1]);
    render_mode_zone(frame, app, chunks[2]);
    render_right_zone(frame, app, chunks[3]);
}

fn render_left_zone(frame: &mut Frame, app: &App, area: Rect) {
    let context = match app.view {
        View::Dashboard => app.era.label().to_string(),
        View::Detail => "detail".to_string(),
    };
    let content = Line::from(vec![
        Span::styled(
            " 󰂺 bookdash ",
            Style::default()
                .fg(app.theme.frost_ice())
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(" › ", Style::default().fg(app.theme.muted())),
        Span::styled(context, Style::default().fg(app.theme.frost_mint())),
    ]);
    frame.render_widget(
        Paragraph::new(content).style(Style::default().bg(app.theme.bg_secondary())),
        area,
    );
}

fn render_center_zone(frame: &mut Frame, app: &App, area: Rect) {
    let content = Line::from(Span::styled(
        app.status_message.clone(),
        Style::default().fg(app.theme.muted()),
    ));
    frame.render_widget(
        Paragraph::new(content)
            .style(Style::default().bg(app.theme.bg_secondary()))
            .alignment(Alignment::Center),
        area,
    );
}

fn render_mode_zone(frame: &mut Frame, app: &App, area: Rect) {
    let (label, bg, fg) = match app.mode {
        Mode::Normal => (" NORMAL ", app.theme.frost_dark(), app.theme.fg_white()),
        Mode::Search => (" SEARCH ", app.theme.yellow(), app.theme.bg()),
    };
    let content = Line::from(Span::styled(
        label,
        Style::default().bg(bg).fg(fg).add_modifier(Modifier::BOLD),
    ));
    frame.render_widget(
        Paragraph::new(content).alignment(Alignment::Center),
        area,
    );
}

fn render_right_zone(frame: &mut Frame, app: &App, area: Rect) {
    let hints = match app.view {
        View::Dashboard => " /:search e:era ↵:open r:reload q:quit ",
        View::Detail => " j/k:scroll esc:back q:quit ",
    };
    let content = Line::from(Span::styled(
        hints,
        Style::default().fg(app.theme.muted()),
    ));
    frame.render_widget(
        Paragraph::new(content)
            .style(Style::default().bg(app.theme.bg_secondary()))
            .alignment(Alignment::Right),
        area,
    );
}
