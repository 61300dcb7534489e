use std::time::Duration;

use crossterm::event::{self, Event as CrosstermEvent, KeyEvent, KeyEventKind};
use tokio::sync::mpsc::UnboundedSender;

use bookdash_core::models::{BookDetail, BookSummary};

/// Events that the TUI can handle. Terminal input and async fetch results
/// arrive on the same channel.
#[derive(Debug)]
pub enum AppEvent {
    /// A key press event.
    Key(KeyEvent),
    /// Terminal was resized.
    Resize(u16, u16),
    /// Periodic tick for redraws.
    Tick,
    /// The collection fetch finished.
    CollectionLoaded {
        generation: u64,
        result: Result<Vec<BookSummary>, String>,
    },
    /// A detail fetch finished.
    DetailLoaded {
        generation: u64,
        result: Result<Box<BookDetail>, String>,
    },
}

/// Forward crossterm events into the app channel from a dedicated thread,
/// emitting `Tick` on poll timeouts. The thread exits once the receiver is
/// dropped.
pub fn spawn_input_thread(tx: UnboundedSender<AppEvent>, tick_rate: Duration) {
    std::thread::spawn(move || loop {
        let event = match event::poll(tick_rate) {
            Ok(true) => match event::read() {
                Ok(CrosstermEvent::Key(key)) if key.kind == KeyEventKind::Press => {
                    AppEvent::Key(key)
                }
                Ok(CrosstermEvent::Resize(w, h)) => AppEvent::Resize(w, h),
                Ok(_) => AppEvent::Tick,
                Err(_) => break,
            },
            Ok(false) => AppEvent::Tick,
            Err(_) => break,
        };
        if tx.send(event).is_err() {
            break;
        }
    });
}
