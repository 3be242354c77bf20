use rand::seq::SliceRandom;
use rand::Rng;

use crate::config::GameConfig;
use crate::game::command::Action;
use crate::game::stats::{LifetimeStats, RoundStats};

/// Per-slot fate of a fleet member. Wracked is terminal; a slot never
/// returns to service.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SlotStatus {
    Inactive,
    Active,
    Wracked,
}

/// The one ship currently under player control.
#[derive(Clone, Copy, Debug)]
pub struct ActiveShip {
    pub pos: usize,
    pub base: usize,
    pub lifetime: u32,
    pub shots: u32,
}

/// The alien currently descending. Altitude 0 is the top of the sky and
/// grows toward the ground.
#[derive(Clone, Copy, Debug)]
pub struct ActiveEnemy {
    pub lane: usize,
    pub altitude: usize,
}

/// A missile in flight, climbing toward altitude 0.
#[derive(Clone, Copy, Debug)]
pub struct Projectile {
    pub lane: usize,
    pub altitude: usize,
}

/// How a round ended.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Outcome {
    AllDestroyed,
    MissedShot,
    LifeExpired,
    GroundHit,
}

impl Outcome {
    pub fn is_win(self) -> bool {
        matches!(self, Outcome::AllDestroyed)
    }

    pub fn message(self) -> &'static str {
        match self {
            Outcome::AllDestroyed => "all aliens destroyed",
            Outcome::MissedShot => "missed shot",
            Outcome::LifeExpired => "ship life expired",
            Outcome::GroundHit => "missed defence",
        }
    }

    pub fn hint(self) -> &'static str {
        if self.is_win() {
            "hit return for more"
        } else {
            "hit return to retry"
        }
    }
}

/// Result of one simulation step.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum StepOutcome {
    /// Round continues; carries the transient feedback line.
    Running(String),
    Over(Outcome),
}

/// The whole world of one round. Owned by the session loop, mutated only
/// through `advance`, and read by the renderer.
#[derive(Clone, Debug)]
pub struct RoundState {
    pub config: GameConfig,
    pub slots: Vec<SlotStatus>,
    /// Lanes the remaining aliens will appear at; the next one is at the
    /// back. Filled once per round, never replenished.
    pub queue: Vec<usize>,
    pub ship: Option<ActiveShip>,
    pub enemy: Option<ActiveEnemy>,
    pub shots: Vec<Projectile>,
}

impl RoundState {
    pub fn new(config: GameConfig, rng: &mut impl Rng) -> Self {
        let mut queue: Vec<usize> = (0..config.num_ships)
            .flat_map(|lane| std::iter::repeat(lane).take(config.num_missiles))
            .collect();
        queue.shuffle(rng);
        RoundState {
            config,
            slots: vec![SlotStatus::Inactive; config.num_ships],
            queue,
            ship: None,
            enemy: None,
            shots: Vec::new(),
        }
    }

    /// An empty world with nothing scheduled; the overview snapshot
    /// builds on top of this.
    pub fn idle(config: GameConfig) -> Self {
        RoundState {
            config,
            slots: vec![SlotStatus::Inactive; config.num_ships],
            queue: Vec::new(),
            ship: None,
            enemy: None,
            shots: Vec::new(),
        }
    }

    /// Lane the next alien will drop into, if any remain.
    pub fn next_spawn_lane(&self) -> Option<usize> {
        self.queue.last().copied()
    }

    /// One simulation step: apply the pending action, then let the world
    /// move. The action has already been validated by the interpreter;
    /// the engine trusts it. Steps run in a fixed order and any terminal
    /// condition short-circuits the rest of the tick.
    pub fn advance(
        &mut self,
        action: Option<Action>,
        score: &mut RoundStats,
        totals: &mut LifetimeStats,
    ) -> StepOutcome {
        let mut feedback = match (&action, &self.ship) {
            (None, None) => String::from("no ship activated yet"),
            (None, Some(_)) => String::from("ship awaits commands"),
            (Some(_), _) => String::new(),
        };

        match action {
            Some(Action::Activate(lane)) => {
                let lifetime = self.config.ship_lifetime();
                self.slots[lane] = SlotStatus::Active;
                self.ship = Some(ActiveShip {
                    pos: lane,
                    base: lane,
                    lifetime,
                    shots: self.config.num_missiles as u32,
                });
                totals.ships_expired.possible += 1;
                totals.moves_made.possible += lifetime;
                feedback = String::from("ship activated");
            }
            Some(Action::MoveLeft) | Some(Action::MoveRight) => {
                if let Some(ship) = self.ship.as_mut() {
                    if matches!(action, Some(Action::MoveLeft)) {
                        ship.pos = ship.pos.saturating_sub(1);
                    } else {
                        ship.pos = (ship.pos + 1).min(self.config.num_ships - 1);
                    }
                    ship.lifetime = ship.lifetime.saturating_sub(1);
                    totals.moves_made.scored += 1;
                }
            }
            Some(Action::Shoot) => {
                if let Some(ship) = self.ship.as_mut() {
                    ship.shots = ship.shots.saturating_sub(1);
                    totals.missed_shots.possible += 1;
                    let lane = ship.pos;
                    let altitude = self.config.sky_height;
                    self.shots.push(Projectile { lane, altitude });
                }
            }
            None => {}
        }

        // A ship out of moves with ammo left loses the round outright,
        // before anything else gets to move this tick. Out of ammo it is
        // merely wracked and play goes on.
        if let Some(ship) = self.ship {
            if ship.lifetime == 0 && ship.shots > 0 {
                self.slots[ship.base] = SlotStatus::Wracked;
                self.ship = None;
                score.losses += 1;
                totals.ships_expired.scored += 1;
                totals.missed_defence.possible += 1;
                return StepOutcome::Over(Outcome::LifeExpired);
            }
            if ship.shots == 0 {
                self.slots[ship.base] = SlotStatus::Wracked;
                self.ship = None;
                feedback = String::from("ship wracked");
            }
        }

        // Projectiles, in firing order. A hit is detected one row early
        // (same lane, same altitude or one below) since shot and enemy
        // close on each other simultaneously. A projectile at the top
        // that finds nothing loses the round before the enemy step runs.
        let mut i = 0;
        while i < self.shots.len() {
            let shot = self.shots[i];
            let hit = self.enemy.map_or(false, |enemy| {
                shot.lane == enemy.lane
                    && (shot.altitude == enemy.altitude || shot.altitude == enemy.altitude + 1)
            });
            if hit {
                self.enemy = None;
                self.shots.remove(i);
                score.destroyed += 1;
                totals.aliens_destroyed.scored += 1;
                feedback = String::from("alien destroyed");
                continue;
            }
            if shot.altitude == 0 {
                score.losses += 1;
                totals.missed_shots.scored += 1;
                totals.missed_defence.possible += 1;
                return StepOutcome::Over(Outcome::MissedShot);
            }
            self.shots[i].altitude -= 1;
            i += 1;
        }

        // The alien descends, or the next one enters the sky. An empty
        // queue with a clear sky is the win.
        if let Some(enemy) = self.enemy.as_mut() {
            enemy.altitude += 1;
            if enemy.altitude >= self.config.sky_height {
                score.losses += 1;
                totals.missed_defence.scored += 1;
                totals.missed_defence.possible += 1;
                return StepOutcome::Over(Outcome::GroundHit);
            }
        } else if let Some(lane) = self.queue.pop() {
            self.enemy = Some(ActiveEnemy { lane, altitude: 0 });
            totals.aliens_destroyed.possible += 1;
        } else {
            score.wins += 1;
            totals.missed_defence.possible += 1;
            return StepOutcome::Over(Outcome::AllDestroyed);
        }

        StepOutcome::Running(feedback)
    }
}
