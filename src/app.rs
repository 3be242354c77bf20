use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use rand::thread_rng;

use crate::config::{GameConfig, MIN_TIME_STEP, SPEED_STEP};
use crate::game::command::{interpret, Action, KeyIntent};
use crate::game::round::{Outcome, RoundState, StepOutcome};
use crate::game::snapshot::{demo_board, Snapshot};
use crate::game::stats::{LifetimeStats, RoundStats};

pub const HELP_PAGES: usize = 5;

/// Where the session currently is. One round at a time; wins, losses
/// and lifetime tallies survive until the process ends.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Screen {
    Help(usize),
    Overview,
    Playing,
    RoundOver(Outcome),
    Goodbye,
}

pub struct App {
    pub should_quit: bool,
    pub screen: Screen,
    pub config: GameConfig,
    pub round: RoundState,
    pub round_stats: RoundStats,
    pub lifetime_stats: LifetimeStats,
    pub snapshot: Snapshot,
    /// Action waiting for the next tick boundary. A newer key replaces
    /// an older one until the tick consumes it.
    pub pending: Option<Action>,
    pub feedback: String,
    pub hint: String,
    /// Seconds between simulation steps; the speed keys move it.
    pub time_step: f64,
    last_step: Instant,
}

impl App {
    pub fn new(config: GameConfig) -> Self {
        let round = RoundState::new(config, &mut thread_rng());
        App {
            should_quit: false,
            screen: if config.show_help { Screen::Help(0) } else { Screen::Overview },
            config,
            round,
            round_stats: RoundStats::default(),
            lifetime_stats: LifetimeStats::default(),
            snapshot: demo_board(config),
            pending: None,
            feedback: String::from("hit return to start"),
            hint: String::new(),
            time_step: config.time_step,
            last_step: Instant::now(),
        }
    }

    /// Called on every timer event; the simulation only steps once the
    /// configured step time has elapsed, so the countdown in between
    /// renders from an unchanged world.
    pub fn on_tick(&mut self) {
        if self.screen != Screen::Playing {
            return;
        }
        if self.last_step.elapsed().as_secs_f64() < self.time_step {
            return;
        }
        self.step();
    }

    fn step(&mut self) {
        let action = self.pending.take();
        match self
            .round
            .advance(action, &mut self.round_stats, &mut self.lifetime_stats)
        {
            StepOutcome::Running(feedback) => {
                self.feedback = feedback;
                self.hint.clear();
            }
            StepOutcome::Over(outcome) => {
                self.feedback = String::from(outcome.message());
                self.hint = String::from(outcome.hint());
                self.screen = Screen::RoundOver(outcome);
            }
        }
        self.last_step = Instant::now();
    }

    pub fn on_key(&mut self, key: KeyEvent) {
        // Ctrl+C always quits
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.screen {
            Screen::Help(page) => self.on_help_key(page, key.code),
            Screen::Overview | Screen::RoundOver(_) => match key.code {
                KeyCode::Enter => self.start_round(),
                KeyCode::Esc => self.screen = Screen::Goodbye,
                _ => {}
            },
            Screen::Playing => self.on_game_key(key.code),
            Screen::Goodbye => self.should_quit = true,
        }
    }

    fn on_help_key(&mut self, page: usize, code: KeyCode) {
        if page + 1 < HELP_PAGES {
            self.screen = Screen::Help(page + 1);
        } else if code == KeyCode::Enter {
            self.screen = Screen::Overview;
        }
    }

    fn on_game_key(&mut self, code: KeyCode) {
        match interpret(code, &self.round) {
            KeyIntent::Act(action) => {
                self.pending = Some(action);
                self.feedback.clear();
                self.hint.clear();
            }
            KeyIntent::SpeedUp => {
                self.time_step = (self.time_step - SPEED_STEP).max(MIN_TIME_STEP);
                self.feedback = String::from("speed increased");
            }
            KeyIntent::SpeedDown => {
                self.time_step += SPEED_STEP;
                self.feedback = String::from("speed decreased");
            }
            KeyIntent::Quit => self.screen = Screen::Goodbye,
            KeyIntent::Notice(message) => self.feedback = message,
            KeyIntent::Ignored => {}
        }
    }

    /// Fresh fleet and queue; scores and lifetime tallies carry over.
    fn start_round(&mut self) {
        self.round = RoundState::new(self.config, &mut thread_rng());
        self.round_stats.destroyed = 0;
        self.pending = None;
        self.screen = Screen::Playing;
        self.last_step = Instant::now();
    }

    pub fn next_action_label(&self) -> String {
        match self.pending {
            Some(action) => action.label(),
            None => String::from("no action"),
        }
    }

    /// Squares left on the "time left" gauge, 4 right after a step down
    /// to 0 just before the next one.
    pub fn countdown_squares(&self) -> usize {
        match self.screen {
            Screen::Playing => {
                let gone = self.last_step.elapsed().as_secs_f64() / self.time_step;
                4usize.saturating_sub((gone * 5.0) as usize)
            }
            Screen::Overview => 1,
            _ => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::round::SlotStatus;

    fn config(show_help: bool) -> GameConfig {
        GameConfig {
            num_ships: 5,
            sky_height: 4,
            num_missiles: 2,
            time_step: 1.0,
            show_help,
        }
    }

    fn playing_app() -> App {
        let mut app = App::new(config(false));
        app.on_key(key(KeyCode::Enter));
        app
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn opens_on_help_unless_disabled() {
        assert_eq!(App::new(config(true)).screen, Screen::Help(0));
        assert_eq!(App::new(config(false)).screen, Screen::Overview);
    }

    #[test]
    fn help_pages_advance_on_any_key_but_gate_on_return() {
        let mut app = App::new(config(true));
        for page in 1..HELP_PAGES {
            app.on_key(key(KeyCode::Char('x')));
            assert_eq!(app.screen, Screen::Help(page));
        }
        app.on_key(key(KeyCode::Char('x')));
        assert_eq!(app.screen, Screen::Help(HELP_PAGES - 1));
        app.on_key(key(KeyCode::Enter));
        assert_eq!(app.screen, Screen::Overview);
    }

    #[test]
    fn return_starts_the_first_round() {
        let app = playing_app();
        assert_eq!(app.screen, Screen::Playing);
        assert_eq!(app.round.queue.len(), 10);
    }

    #[test]
    fn later_input_overwrites_the_pending_action() {
        let mut app = playing_app();
        app.on_key(key(KeyCode::Char('1')));
        assert_eq!(app.pending, Some(Action::Activate(0)));
        app.on_key(key(KeyCode::Char('2')));
        assert_eq!(app.pending, Some(Action::Activate(1)));

        app.step();
        assert_eq!(app.round.ship.map(|s| s.base), Some(1));
        assert_eq!(app.round.slots[0], SlotStatus::Inactive);
        assert!(app.pending.is_none());
    }

    #[test]
    fn rejected_keys_only_set_feedback() {
        let mut app = playing_app();
        app.on_key(key(KeyCode::Char('7')));
        assert!(app.pending.is_none());
        assert_eq!(app.feedback, "no ship at position 7");
    }

    #[test]
    fn speed_keys_step_and_clamp() {
        let mut app = playing_app();
        for _ in 0..20 {
            app.on_key(key(KeyCode::Char('+')));
        }
        assert!(app.time_step >= MIN_TIME_STEP - 1e-9);
        assert_eq!(app.feedback, "speed increased");

        app.on_key(key(KeyCode::Char('-')));
        assert!(app.time_step > MIN_TIME_STEP);
        assert_eq!(app.feedback, "speed decreased");
    }

    #[test]
    fn simulation_waits_for_the_step_boundary() {
        let mut app = playing_app();
        let queued = app.round.queue.len();
        app.on_tick();
        // a fresh clock and a 1 s step: nothing may move yet
        assert_eq!(app.round.queue.len(), queued);
        app.step();
        assert_eq!(app.round.queue.len(), queued - 1);
    }

    #[test]
    fn round_end_keeps_score_and_restart_resets_the_world() {
        let mut app = playing_app();
        app.round.queue.clear();
        app.round.enemy = None;
        app.step();
        assert_eq!(app.screen, Screen::RoundOver(Outcome::AllDestroyed));
        assert_eq!(app.round_stats.wins, 1);
        assert_eq!(app.feedback, "all aliens destroyed");
        assert_eq!(app.hint, "hit return for more");

        app.on_key(key(KeyCode::Enter));
        assert_eq!(app.screen, Screen::Playing);
        assert_eq!(app.round_stats.wins, 1);
        assert_eq!(app.round_stats.destroyed, 0);
        assert_eq!(app.round.queue.len(), 10);
    }

    #[test]
    fn escape_routes_through_the_goodbye_screen() {
        let mut app = playing_app();
        app.on_key(key(KeyCode::Esc));
        assert_eq!(app.screen, Screen::Goodbye);
        assert!(!app.should_quit);
        app.on_key(key(KeyCode::Char('q')));
        assert!(app.should_quit);
    }

    #[test]
    fn ctrl_c_quits_from_anywhere() {
        let mut app = App::new(config(true));
        app.on_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }

    #[test]
    fn next_action_label_tracks_the_buffer() {
        let mut app = playing_app();
        assert_eq!(app.next_action_label(), "no action");
        app.on_key(key(KeyCode::Char('3')));
        assert_eq!(app.next_action_label(), "start ship 3");
    }
}
