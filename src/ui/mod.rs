pub mod help;
pub mod world;

use ratatui::prelude::*;

use crate::app::{App, Screen};

pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    match app.screen {
        Screen::Help(page) => help::render_help(frame, area, page, &app.config),
        Screen::Goodbye => {
            help::render_goodbye(frame, area, &app.round_stats, &app.lifetime_stats)
        }
        Screen::Overview | Screen::Playing | Screen::RoundOver(_) => {
            world::render(frame, area, app)
        }
    }
}
