use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use bookdash_core::models::BookDetail;

use crate::app::{App, DetailState};
use crate::ui::centered_rect;

/// Render the detail view for the currently opened work.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    match &app.detail {
        None => {}
        Some(DetailState::Loading { title }) => {
            let rect = centered_rect(50, 20, area);
            let msg = Paragraph::new(format!("Loading {title}..."))
                .alignment(Alignment::Center)
                .style(Style::default().fg(app.theme.frost_ice()))
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(app.theme.border())),
                );
            frame.render_widget(msg, rect);
        }
        Some(DetailState::Failed(message)) => {
            let rect = centered_rect(60, 30, area);
            let lines = vec![
                Line::from(Span::styled(
                    "Error Loading Book",
                    Style::default()
                        .fg(app.theme.red())
                        .add_modifier(Modifier::BOLD),
                )),
                Line::from(""),
                Line::from(message.as_str()),
                Line::from(""),
                Line::from(Span::styled(
                    "Esc to go back",
                    Style::default().fg(app.theme.muted()),
                )),
            ];
            let msg = Paragraph::new(lines).alignment(Alignment::Center).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(app.theme.red())),
            );
            frame.render_widget(msg, rect);
        }
        Some(DetailState::Ready(detail)) => render_detail(frame, app, area, detail),
    }
}

fn render_detail(frame: &mut Frame, app: &App, area: Rect, detail: &BookDetail) {
    let block = Block::default()
        .title(" Book Detail (Esc: back, j/k: scroll) ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.active_panel()))
        .style(Style::default().bg(app.theme.bg()));

    let mut lines: Vec<Line> = Vec::new();

    lines.push(Line::from(Span::styled(
        detail.title.clone(),
        Style::default()
            .fg(app.theme.fg_bright())
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(vec![
        Span::styled("First published: ", Style::default().fg(app.theme.muted())),
        Span::styled(
            detail.first_publish_date.clone(),
            Style::default().fg(app.theme.yellow()),
        ),
    ]));
    lines.push(Line::from(vec![
        Span::styled("Cover: ", Style::default().fg(app.theme.muted())),
        Span::styled(
            detail.cover_image_url.clone(),
            Style::default().fg(app.theme.frost_ice()),
        ),
    ]));
    lines.push(Line::from(""));

    if !detail.authors.is_empty() {
        lines.push(section_header(app, "Author(s)"));
        for author in &detail.authors {
            lines.push(Line::from(Span::styled(
                author.name.clone(),
                Style::default()
                    .fg(app.theme.fg())
                    .add_modifier(Modifier::BOLD),
            )));
            if author.birth_date != "N/A" {
                lines.push(Line::from(Span::styled(
                    format!("  Born: {}", author.birth_date),
                    Style::default().fg(app.theme.muted()),
                )));
            }
            lines.push(Line::from(Span::styled(
                format!("  {}", clip(&author.bio, 300)),
                Style::default().fg(app.theme.fg()),
            )));
            lines.push(Line::from(""));
        }
    }

    lines.push(section_header(app, "Description"));
    lines.push(Line::from(detail.description.clone()));
    lines.push(Line::from(""));

    if !detail.subjects.is_empty() {
        lines.push(section_header(app, "Subjects & Topics"));
        lines.push(Line::from(Span::styled(
            detail.subjects.join(" · "),
            Style::default().fg(app.theme.frost_mint()),
        )));
        lines.push(Line::from(""));
    }

    if !detail.excerpts.is_empty() {
        lines.push(section_header(app, "Excerpts"));
        for excerpt in &detail.excerpts {
            lines.push(Line::from(Span::styled(
                format!("“{excerpt}”"),
                Style::default().fg(app.theme.fg()),
            )));
            lines.push(Line::from(""));
        }
    }

    if !detail.links.is_empty() {
        lines.push(section_header(app, "External Resources"));
        for link in &detail.links {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("{}: ", link.title),
                    Style::default().fg(app.theme.fg()),
                ),
                Span::styled(
                    link.url.clone(),
                    Style::default().fg(app.theme.frost_ice()),
                ),
            ]));
        }
    }

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((app.detail_scroll, 0));
    frame.render_widget(paragraph, area);
}

fn section_header<'a>(app: &App, title: &'a str) -> Line<'a> {
    Line::from(Span::styled(
        title,
        Style::default()
            .fg(app.theme.frost_blue())
            .add_modifier(Modifier::BOLD),
    ))
}

fn clip(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let clipped: String = s.chars().take(max).collect();
        format!("{clipped}...")
    }
}
