use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph};
use ratatui::Frame;

use bookdash_core::models::BookSummary;

use crate::app::App;
use crate::ui::truncate;

/// The filtered book collection.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(format!(" Book Collection ({}) ", app.books.len()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.active_panel()))
        .style(Style::default().bg(app.theme.bg()));

    if app.books.is_empty() {
        let empty = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                "  No books match your search criteria. Try adjusting your filters.",
                Style::default().fg(app.theme.muted()),
            )),
        ])
        .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let inner = block.inner(area);
    let visible_height = inner.height as usize;
    let scroll_offset = if app.selected_index >= visible_height {
        app.selected_index - visible_height + 1
    } else {
        0
    };

    let items: Vec<ListItem> = app
        .books
        .iter()
        .enumerate()
        .skip(scroll_offset)
        .take(visible_height)
        .map(|(i, book)| render_book_row(app, i, book, inner.width))
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}

fn render_book_row<'a>(app: &'a App, i: usize, book: &'a BookSummary, width: u16) -> ListItem<'a> {
    let is_selected = i == app.selected_index;

    let prefix = if is_selected { "▶ " } else { "  " };
    let title_style = if is_selected {
        Style::default()
            .fg(app.theme.fg_bright())
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(app.theme.fg()).add_modifier(Modifier::BOLD)
    };

    let title_max = (width as usize / 2).max(16);
    let line = Line::from(vec![
        Span::styled(prefix, Style::default().fg(app.theme.frost_ice())),
        Span::styled(truncate(&book.title, title_max), title_style),
        Span::styled(
            format!("  {}", truncate(&book.authors_joined(), 32)),
            Style::default().fg(app.theme.frost_mint()),
        ),
        Span::styled(
            format!("  {}", book.year_label()),
            Style::default().fg(app.theme.yellow()),
        ),
        Span::styled(
            format!("  {} ed.", book.edition_count),
            Style::default().fg(app.theme.muted()),
        ),
    ]);

    let bg = if is_selected {
        Style::default().bg(app.theme.selection_bg())
    } else {
        Style::default()
    };
    ListItem::new(line).style(bg)
}
