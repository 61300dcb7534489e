pub mod app;
pub mod event;
pub mod keys;
pub mod theme;
pub mod ui;

use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tokio::sync::mpsc::UnboundedReceiver;

use app::App;
use event::{spawn_input_thread, AppEvent};

/// Run the full TUI application until the user quits.
///
/// `rx` is the receiving end of the channel whose sender lives on the `App`;
/// terminal input and background fetch results both arrive through it.
pub async fn run_tui(app: &mut App, rx: &mut UnboundedReceiver<AppEvent>) -> Result<()> {
    // Install panic hook
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = crossterm::terminal::disable_raw_mode();
        let _ = std::io::stdout().execute(crossterm::terminal::LeaveAlternateScreen);
        original_hook(info);
    }));

    // Setup terminal
    enable_raw_mode()?;
    io::stdout().execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    spawn_input_thread(
        app.event_tx.clone(),
        Duration::from_millis(app.config.ui.tick_rate_ms),
    );
    app.reload_collection();

    // Main loop
    while let Some(event) = rx.recv().await {
        match event {
            AppEvent::Key(key) => keys::handle_key(app, key.code, key.modifiers),
            AppEvent::Resize(_, _) | AppEvent::Tick => {}
            AppEvent::CollectionLoaded { generation, result } => {
                app.on_collection_loaded(generation, result);
            }
            AppEvent::DetailLoaded { generation, result } => {
                app.on_detail_loaded(generation, result);
            }
        }

        terminal.draw(|frame| ui::render(frame, app))?;

        if app.should_quit {
            break;
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}
