mod dashboard;
mod detail;
mod search;

use crossterm::event::{KeyCode, KeyModifiers};

use crate::app::{App, Mode, View};

/// Route a key press to the handler for the current view and mode.
pub fn handle_key(app: &mut App, code: KeyCode, modifiers: KeyModifiers) {
    match app.view {
        View::Detail => detail::handle_key(app, code, modifiers),
        View::Dashboard => match app.mode {
            Mode::Search => search::handle_key(app, code, modifiers),
            Mode::Normal => dashboard::handle_key(app, code, modifiers),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bookdash_core::models::BookSummary;
    use bookdash_core::{AppConfig, EraFilter};

    fn app_with_books() -> App {
        let (tx, _rx) = tokio::sync::mpsc::unbounded_channel();
        let mut app = App::new(AppConfig::default(), tx);
        app.on_collection_loaded(
            0,
            Ok(vec![
                BookSummary {
                    key: "/works/OL1W".into(),
                    id: "OL1W".into(),
                    title: "The Hobbit".into(),
                    authors: vec!["J. R. R. Tolkien".into()],
                    first_publish_year: Some(1937),
                    cover_image_url: String::new(),
                    subjects: vec![],
                    edition_count: 120,
                },
                BookSummary {
                    key: "/works/OL2W".into(),
                    id: "OL2W".into(),
                    title: "Clean Code".into(),
                    authors: vec!["Robert C. Martin".into()],
                    first_publish_year: Some(2008),
                    cover_image_url: String::new(),
                    subjects: vec![],
                    edition_count: 15,
                },
            ]),
        );
        app
    }

    #[test]
    fn q_quits_from_dashboard() {
        let mut app = app_with_books();
        handle_key(&mut app, KeyCode::Char('q'), KeyModifiers::NONE);
        assert!(app.should_quit);
    }

    #[test]
    fn slash_enters_search_and_typed_chars_filter_live() {
        let mut app = app_with_books();
        handle_key(&mut app, KeyCode::Char('/'), KeyModifiers::NONE);
        assert_eq!(app.mode, Mode::Search);

        for c in "hobbit".chars() {
            handle_key(&mut app, KeyCode::Char(c), KeyModifiers::NONE);
        }
        assert_eq!(app.books.len(), 1);
        assert_eq!(app.books[0].title, "The Hobbit");

        handle_key(&mut app, KeyCode::Esc, KeyModifiers::NONE);
        assert_eq!(app.mode, Mode::Normal);
        // Leaving search mode keeps the filter.
        assert_eq!(app.books.len(), 1);
    }

    #[test]
    fn ctrl_u_clears_the_query() {
        let mut app = app_with_books();
        handle_key(&mut app, KeyCode::Char('/'), KeyModifiers::NONE);
        handle_key(&mut app, KeyCode::Char('x'), KeyModifiers::NONE);
        assert!(app.books.is_empty());
        handle_key(&mut app, KeyCode::Char('u'), KeyModifiers::CONTROL);
        assert!(app.search_input.is_empty());
        assert_eq!(app.books.len(), 2);
    }

    #[test]
    fn e_cycles_era_filter() {
        let mut app = app_with_books();
        handle_key(&mut app, KeyCode::Char('e'), KeyModifiers::NONE);
        assert_eq!(app.era, EraFilter::Recent);
        handle_key(&mut app, KeyCode::Char('E'), KeyModifiers::SHIFT);
        assert_eq!(app.era, EraFilter::All);
    }

    #[tokio::test]
    async fn enter_opens_detail_and_esc_returns() {
        let mut app = app_with_books();
        handle_key(&mut app, KeyCode::Char('j'), KeyModifiers::NONE);
        handle_key(&mut app, KeyCode::Enter, KeyModifiers::NONE);
        assert_eq!(app.view, View::Detail);

        handle_key(&mut app, KeyCode::Esc, KeyModifiers::NONE);
        assert_eq!(app.view, View::Dashboard);
        assert!(app.detail.is_none());
    }
}
