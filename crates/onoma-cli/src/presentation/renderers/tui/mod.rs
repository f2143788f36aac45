mod app;
mod ui;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::sync::mpsc::Receiver;
use std::time::Duration;

use app::AppState;
use onoma_types::Record;

/// Run the interactive browse screen until the user quits.
///
/// `load_rx` carries the single startup load result; until it arrives the
/// loading frame is drawn. Every keystroke edits the search term and the
/// visible set is recomputed before the next draw — no debounce.
pub fn run(load_rx: Receiver<onoma_engine::Result<Vec<Record>>>) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    ctrlc::set_handler(move || {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        std::process::exit(0);
    })?;

    let mut app = AppState::new();
    let mut should_quit = false;

    let tick_rate = Duration::from_millis(100);

    while !should_quit {
        terminal.draw(|f| {
            ui::draw(f, &app);
        })?;

        if event::poll(tick_rate)? {
            if let Event::Key(key) = event::read()? {
                match key.code {
                    KeyCode::Esc => {
                        should_quit = true;
                    }
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        should_quit = true;
                    }
                    KeyCode::Backspace => {
                        app.pop_char();
                    }
                    KeyCode::Up => {
                        app.scroll_up();
                    }
                    KeyCode::Down => {
                        app.scroll_down();
                    }
                    KeyCode::Char(c) => {
                        app.push_char(c);
                    }
                    _ => {}
                }
            }
        }

        while let Ok(outcome) = load_rx.try_recv() {
            app.apply_load(outcome);
        }
    }

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}
