mod async_tasks;
mod navigation;

pub use async_tasks::{spawn_collection_fetch, spawn_detail_fetch};

use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;

use bookdash_core::models::{BookDetail, BookSummary};
use bookdash_core::stats::{DashboardStats, DecadeBucket, EditionRangeBucket};
use bookdash_core::{compute_stats, decade_distribution, edition_range_distribution};
use bookdash_core::{filter_books_now, AppConfig, EraFilter};

use crate::event::AppEvent;
use crate::theme::NordTheme;

/// Input modes for the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Normal,
    Search,
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Normal => write!(f, "NORMAL"),
            Self::Search => write!(f, "SEARCH"),
        }
    }
}

/// Which view is currently routed. No business logic lives here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Dashboard,
    Detail,
}

/// Lifecycle of the dashboard collection fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CollectionState {
    Loading,
    Ready,
    Failed(String),
}

/// Lifecycle of the current detail fetch. Created on navigation to the
/// detail view, discarded on navigation away.
#[derive(Debug)]
pub enum DetailState {
    Loading { title: String },
    Ready(Box<BookDetail>),
    Failed(String),
}

/// Main application state.
pub struct App {
    pub should_quit: bool,
    pub view: View,
    pub mode: Mode,

    pub collection_state: CollectionState,
    /// All books (unfiltered).
    pub all_books: Vec<BookSummary>,
    /// Books currently displayed, derived from (all_books, query, era).
    pub books: Vec<BookSummary>,

    /// Derived in full from `all_books` whenever it changes.
    pub stats: DashboardStats,
    pub decades: Vec<DecadeBucket>,
    pub edition_ranges: Vec<EditionRangeBucket>,

    /// Search input buffer.
    pub search_input: String,
    pub era: EraFilter,

    /// Currently selected book index in the filtered list.
    pub selected_index: usize,

    pub detail: Option<DetailState>,
    pub detail_scroll: u16,

    /// Status bar message.
    pub status_message: String,

    pub config: AppConfig,
    pub theme: NordTheme,

    /// Sender cloned into background fetch tasks.
    pub event_tx: UnboundedSender<AppEvent>,

    /// Stale-result guards: a finished fetch is applied only if its
    /// generation still matches.
    collection_generation: u64,
    detail_generation: u64,

    /// In-flight detail fetch, aborted when the view is left.
    detail_task: Option<JoinHandle<()>>,
}

impl App {
    pub fn new(config: AppConfig, event_tx: UnboundedSender<AppEvent>) -> Self {
        Self {
            should_quit: false,
            view: View::Dashboard,
            mode: Mode::Normal,
            collection_state: CollectionState::Loading,
            all_books: Vec::new(),
            books: Vec::new(),
            stats: DashboardStats::default(),
            decades: Vec::new(),
            edition_ranges: Vec::new(),
            search_input: String::new(),
            era: EraFilter::All,
            selected_index: 0,
            detail: None,
            detail_scroll: 0,
            status_message: "Loading books...".to_string(),
            config,
            theme: NordTheme::default(),
            event_tx,
            collection_generation: 0,
            detail_generation: 0,
            detail_task: None,
        }
    }

    // ─── Collection lifecycle ──────────────────────────────

    /// Kick off (or restart) the collection fetch.
    pub fn reload_collection(&mut self) {
        self.collection_generation += 1;
        self.collection_state = CollectionState::Loading;
        self.status_message = "Loading books...".to_string();
        spawn_collection_fetch(
            self.event_tx.clone(),
            self.config.api.clone(),
            self.collection_generation,
        );
    }

    pub fn on_collection_loaded(
        &mut self,
        generation: u64,
        result: Result<Vec<BookSummary>, String>,
    ) {
        if generation != self.collection_generation {
            return;
        }
        match result {
            Ok(books) => {
                self.all_books = books;
                self.stats = compute_stats(&self.all_books);
                self.decades = decade_distribution(&self.all_books);
                self.edition_ranges = edition_range_distribution(&self.all_books);
                self.collection_state = CollectionState::Ready;
                self.status_message = format!("Loaded {} books", self.all_books.len());
                self.apply_filters();
            }
            Err(message) => {
                tracing::warn!(%message, "collection fetch failed");
                self.collection_state = CollectionState::Failed(message);
                self.status_message = "Collection load failed, press r to retry".to_string();
            }
        }
    }

    /// Recompute the visible list from (all_books, query, era). Runs in full
    /// on every relevant input change; the source collection is untouched.
    pub fn apply_filters(&mut self) {
        self.books = filter_books_now(&self.all_books, &self.search_input, self.era);
        if self.selected_index >= self.books.len() {
            self.selected_index = self.books.len().saturating_sub(1);
        }
    }

    // ─── Search & era controls ─────────────────────────────

    pub fn push_search_char(&mut self, c: char) {
        self.search_input.push(c);
        self.apply_filters();
    }

    pub fn pop_search_char(&mut self) {
        self.search_input.pop();
        self.apply_filters();
    }

    pub fn clear_search(&mut self) {
        self.search_input.clear();
        self.apply_filters();
    }

    pub fn cycle_era(&mut self) {
        self.era = self.era.next();
        self.apply_filters();
        self.status_message = format!("Era: {}", self.era.label());
    }

    pub fn cycle_era_back(&mut self) {
        self.era = self.era.prev();
        self.apply_filters();
        self.status_message = format!("Era: {}", self.era.label());
    }

    // ─── Detail lifecycle ──────────────────────────────────

    /// Navigate to the detail view for the selected book.
    pub fn open_selected_detail(&mut self) {
        let Some(book) = self.books.get(self.selected_index) else {
            return;
        };
        let (id, title) = (book.id.clone(), book.title.clone());

        self.abort_detail_task();
        self.detail_generation += 1;
        self.view = View::Detail;
        self.detail = Some(DetailState::Loading {
            title: title.clone(),
        });
        self.detail_scroll = 0;
        self.status_message = format!("Loading {title}...");

        let handle = spawn_detail_fetch(
            self.event_tx.clone(),
            self.config.api.clone(),
            id,
            self.detail_generation,
        );
        self.detail_task = Some(handle);
    }

    pub fn on_detail_loaded(&mut self, generation: u64, result: Result<Box<BookDetail>, String>) {
        if generation != self.detail_generation || self.view != View::Detail {
            return;
        }
        self.detail_task = None;
        match result {
            Ok(detail) => {
                self.status_message = format!("Viewing {}", detail.title);
                self.detail = Some(DetailState::Ready(detail));
            }
            Err(message) => {
                self.status_message = "Detail load failed".to_string();
                self.detail = Some(DetailState::Failed(message));
            }
        }
    }

    /// Leave the detail view, cancelling any in-flight fetch for it.
    pub fn close_detail(&mut self) {
        self.abort_detail_task();
        self.detail_generation += 1;
        self.view = View::Dashboard;
        self.detail = None;
        self.detail_scroll = 0;
        self.status_message.clear();
    }

    fn abort_detail_task(&mut self) {
        if let Some(task) = self.detail_task.take() {
            task.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_app() -> App {
        let (tx, _rx) = tokio::sync::mpsc::unbounded_channel();
        App::new(AppConfig::default(), tx)
    }

    fn book(id: &str, title: &str, year: Option<i32>) -> BookSummary {
        BookSummary {
            key: format!("/works/{id}"),
            id: id.to_string(),
            title: title.to_string(),
            authors: vec!["Author".to_string()],
            first_publish_year: year,
            cover_image_url: String::new(),
            subjects: vec![],
            edition_count: 1,
        }
    }

    #[test]
    fn collection_load_derives_stats_and_list() {
        let mut app = test_app();
        app.on_collection_loaded(
            0,
            Ok(vec![book("a", "Alpha", Some(1995)), book("b", "Beta", None)]),
        );
        assert_eq!(app.collection_state, CollectionState::Ready);
        assert_eq!(app.stats.total_books, 2);
        assert_eq!(app.books.len(), 2);
        assert_eq!(app.decades.len(), 1);
        assert_eq!(app.edition_ranges.len(), 4);
    }

    #[tokio::test]
    async fn stale_collection_result_is_ignored() {
        let mut app = test_app();
        app.reload_collection(); // generation -> 1
        app.on_collection_loaded(0, Ok(vec![book("a", "Alpha", None)]));
        assert!(app.all_books.is_empty());
        assert_eq!(app.collection_state, CollectionState::Loading);
    }

    #[test]
    fn search_input_refilters_and_clamps_selection() {
        let mut app = test_app();
        app.on_collection_loaded(
            0,
            Ok(vec![
                book("a", "Rust in Action", Some(2021)),
                book("b", "Elm Basics", Some(2018)),
            ]),
        );
        app.selected_index = 1;
        for c in "rust".chars() {
            app.push_search_char(c);
        }
        assert_eq!(app.books.len(), 1);
        assert_eq!(app.selected_index, 0);

        app.clear_search();
        assert_eq!(app.books.len(), 2);
    }

    #[tokio::test]
    async fn closing_detail_discards_late_result() {
        let mut app = test_app();
        app.on_collection_loaded(0, Ok(vec![book("a", "Alpha", None)]));
        app.open_selected_detail();
        let generation = 1;
        app.close_detail();
        assert_eq!(app.view, View::Dashboard);

        // The fetch finishes after the user already navigated away.
        app.on_detail_loaded(
            generation,
            Err("too late".to_string()),
        );
        assert!(app.detail.is_none());
        assert_eq!(app.view, View::Dashboard);
    }

    #[tokio::test]
    async fn failed_detail_is_surfaced_in_view() {
        let mut app = test_app();
        app.on_collection_loaded(0, Ok(vec![book("a", "Alpha", None)]));
        app.open_selected_detail();
        assert_eq!(app.view, View::Detail);
        app.on_detail_loaded(1, Err("not found: /works/a".to_string()));
        assert!(matches!(app.detail, Some(DetailState::Failed(_))));
    }
}
