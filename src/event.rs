use std::io;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use crossterm::event::{self, KeyEvent, KeyEventKind};

/// Inputs the session loop reacts to: a key press, or the passage of
/// one poll interval with no key available.
pub enum Event {
    Key(KeyEvent),
    Tick,
}

/// Reads crossterm events on a background thread so the draw loop never
/// blocks on input. At most one key is delivered per poll.
pub struct EventHandler {
    rx: mpsc::Receiver<Event>,
}

impl EventHandler {
    pub fn new(poll_interval: Duration) -> Self {
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || loop {
            let next = if event::poll(poll_interval).unwrap_or(false) {
                match event::read() {
                    Ok(crossterm::event::Event::Key(key)) if key.kind == KeyEventKind::Press => {
                        Event::Key(key)
                    }
                    _ => continue,
                }
            } else {
                Event::Tick
            };
            if tx.send(next).is_err() {
                return;
            }
        });
        Self { rx }
    }

    pub fn next(&self) -> io::Result<Event> {
        self.rx
            .recv()
            .map_err(|err| io::Error::new(io::ErrorKind::BrokenPipe, err))
    }
}
