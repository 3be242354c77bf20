mod app;
mod config;
mod event;
mod game;
mod ui;

use std::io;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use app::App;
use config::{Args, GameConfig};
use event::{Event, EventHandler};

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let (_, rows) = crossterm::terminal::size().context("cannot query the terminal size")?;
    // every configuration failure surfaces here, before raw mode or any
    // game state exists
    let config = GameConfig::resolve(&args, rows)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let mut app = App::new(config);
    let events = EventHandler::new(Duration::from_millis(33));

    // Main loop
    loop {
        terminal.draw(|frame| ui::render(frame, &app))?;

        match events.next()? {
            Event::Tick => app.on_tick(),
            Event::Key(key) => app.on_key(key),
        }

        if app.should_quit {
            break;
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}
