use std::fmt;

/// Wins and losses carry across rounds; `destroyed` restarts at zero
/// with each round.
#[derive(Clone, Copy, Default, Debug)]
pub struct RoundStats {
    pub wins: u32,
    pub losses: u32,
    pub destroyed: u32,
}

/// A "scored out of possible" pair, e.g. aliens destroyed out of aliens
/// that entered the sky.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct Tally {
    pub scored: u32,
    pub possible: u32,
}

impl fmt::Display for Tally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", self.scored, self.possible)
    }
}

/// Session-wide accumulators, reported on the goodbye screen.
#[derive(Clone, Copy, Default, Debug)]
pub struct LifetimeStats {
    pub aliens_destroyed: Tally,
    pub moves_made: Tally,
    pub missed_defence: Tally,
    pub missed_shots: Tally,
    pub ships_expired: Tally,
}

impl LifetimeStats {
    pub fn rows(&self) -> [(&'static str, Tally); 5] {
        [
            ("aliens destroyed", self.aliens_destroyed),
            ("moves made", self.moves_made),
            ("missed defence", self.missed_defence),
            ("missed shots", self.missed_shots),
            ("ships lifetime expired", self.ships_expired),
        ]
    }
}
