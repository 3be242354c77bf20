use crossterm::event::KeyCode;

use crate::game::round::{RoundState, SlotStatus};

/// A validated simulation action, applied at the next tick boundary.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Action {
    Activate(usize),
    MoveLeft,
    MoveRight,
    Shoot,
}

impl Action {
    /// Label for the "next:" preview line.
    pub fn label(self) -> String {
        match self {
            Action::Activate(lane) => format!("start ship {}", lane + 1),
            Action::MoveLeft => String::from("move left"),
            Action::MoveRight => String::from("move right"),
            Action::Shoot => String::from("shoot"),
        }
    }
}

/// What a key press means against the current world.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum KeyIntent {
    Act(Action),
    SpeedUp,
    SpeedDown,
    Quit,
    /// Rejected input, surfaced as a feedback line only; the simulation
    /// never sees it.
    Notice(String),
    Ignored,
}

/// Maps a key to an intent. Pure: the caller owns the pending-action
/// buffer and the clock.
pub fn interpret(code: KeyCode, round: &RoundState) -> KeyIntent {
    match code {
        KeyCode::Esc => KeyIntent::Quit,
        KeyCode::Char('+') => KeyIntent::SpeedUp,
        KeyCode::Char('-') => KeyIntent::SpeedDown,
        KeyCode::Char(c @ '0'..='9') => activate_intent(c, round),
        KeyCode::Char('a') => match round.ship {
            Some(ship) if ship.pos > 0 => KeyIntent::Act(Action::MoveLeft),
            _ => KeyIntent::Ignored,
        },
        KeyCode::Char('d') => match round.ship {
            Some(ship) if ship.pos + 1 < round.config.num_ships => {
                KeyIntent::Act(Action::MoveRight)
            }
            _ => KeyIntent::Ignored,
        },
        KeyCode::Char('s') => match round.ship {
            Some(ship) if ship.shots > 0 => KeyIntent::Act(Action::Shoot),
            _ => KeyIntent::Ignored,
        },
        _ => KeyIntent::Ignored,
    }
}

fn activate_intent(digit: char, round: &RoundState) -> KeyIntent {
    if round.ship.is_some() {
        return KeyIntent::Notice(String::from("ship already active"));
    }
    // keys are 1-based; '0' stands in for lane ten
    let lane = match digit.to_digit(10) {
        Some(0) => 9,
        Some(d) => d as usize - 1,
        None => return KeyIntent::Ignored,
    };
    if lane >= round.config.num_ships {
        return KeyIntent::Notice(format!("no ship at position {}", lane + 1));
    }
    match round.slots[lane] {
        SlotStatus::Inactive => KeyIntent::Act(Action::Activate(lane)),
        _ => KeyIntent::Notice(format!("ship {} already active", lane + 1)),
    }
}
