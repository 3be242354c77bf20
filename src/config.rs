use clap::{Parser, ValueEnum};
use thiserror::Error;

/// Rows the board needs around the sky: scores, fleet, countdown,
/// feedback and the surrounding frame.
const CHROME_ROWS: usize = 17;

/// Smallest step time the speed keys can reach, in seconds.
pub const MIN_TIME_STEP: f64 = 0.1;

/// Amount one speed keypress shifts the step time, in seconds.
pub const SPEED_STEP: f64 = 0.1;

#[derive(Parser, Debug)]
#[command(name = "alienshower", version, about = "A round-based alien defence game for the terminal")]
pub struct Args {
    /// Difficulty preset; overrides the other game options unless custom
    #[arg(long, value_enum, default_value = "custom")]
    pub difficulty: Difficulty,

    /// Number of ships in the fleet (2-10)
    #[arg(long, default_value_t = 5)]
    pub ships: usize,

    /// Sky height in rows; raised automatically if a win would be unreachable
    #[arg(long, default_value_t = 4)]
    pub sky: usize,

    /// Missiles carried by each ship
    #[arg(long, default_value_t = 2)]
    pub missiles: usize,

    /// Seconds between simulation steps
    #[arg(long, default_value_t = 1.0)]
    pub speed: f64,

    /// Skip the help screens
    #[arg(long)]
    pub no_help: bool,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, ValueEnum)]
pub enum Difficulty {
    /// Normal game with a high sky
    Easy,
    /// Challenging for beginners
    Normal,
    /// Faster countdown and more ships
    Hard,
    /// Even faster countdown and more shots to make
    Brainfuck,
    /// Whatever the other flags say
    Custom,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid ship count {0}: choose between 2 and 10")]
    ShipCount(usize),
    #[error("invalid missile count {0}: each ship needs at least one missile")]
    MissileCount(usize),
    #[error("invalid speed {0}: the step time must be positive")]
    Speed(f64),
    #[error("sky height {sky} does not fit this terminal: resize it or reduce the sky to at most {max} rows")]
    SkyHeight { sky: usize, max: isize },
}

/// Session configuration, fixed once validation passes.
#[derive(Clone, Copy, Debug)]
pub struct GameConfig {
    pub num_ships: usize,
    pub sky_height: usize,
    pub num_missiles: usize,
    pub time_step: f64,
    pub show_help: bool,
}

impl GameConfig {
    /// Applies the difficulty preset, validates, and clamps the sky so a
    /// win stays reachable. `rows` is the terminal height; the clamped
    /// sky must leave room for the board chrome.
    pub fn resolve(args: &Args, rows: u16) -> Result<Self, ConfigError> {
        let (ships, sky, missiles, speed) = match args.difficulty {
            Difficulty::Easy => (5, 8, 2, 1.0),
            Difficulty::Normal => (5, 4, 2, 1.0),
            Difficulty::Hard => (10, 4, 2, 0.5),
            Difficulty::Brainfuck => (10, 4, 3, 0.3),
            Difficulty::Custom => (args.ships, args.sky, args.missiles, args.speed),
        };

        if !(2..=10).contains(&ships) {
            return Err(ConfigError::ShipCount(ships));
        }
        if missiles < 1 {
            return Err(ConfigError::MissileCount(missiles));
        }
        if speed <= 0.0 {
            return Err(ConfigError::Speed(speed));
        }

        let sky = sky.max(ships - 1).max(missiles);
        if (rows as usize) < sky + CHROME_ROWS {
            return Err(ConfigError::SkyHeight {
                sky,
                max: rows as isize - CHROME_ROWS as isize,
            });
        }

        Ok(GameConfig {
            num_ships: ships,
            sky_height: sky,
            num_missiles: missiles,
            time_step: speed,
            show_help: !args.no_help,
        })
    }

    /// Move budget granted to a freshly activated ship.
    pub fn ship_lifetime(&self) -> u32 {
        (self.num_ships * self.num_missiles / 2) as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(difficulty: Difficulty, ships: usize, sky: usize, missiles: usize, speed: f64) -> Args {
        Args { difficulty, ships, sky, missiles, speed, no_help: false }
    }

    #[test]
    fn custom_passes_flags_through() {
        let config = GameConfig::resolve(&args(Difficulty::Custom, 4, 6, 2, 0.8), 50).unwrap();
        assert_eq!(config.num_ships, 4);
        assert_eq!(config.sky_height, 6);
        assert_eq!(config.num_missiles, 2);
        assert_eq!(config.time_step, 0.8);
    }

    #[test]
    fn presets_override_flags() {
        let config = GameConfig::resolve(&args(Difficulty::Hard, 2, 2, 1, 5.0), 50).unwrap();
        assert_eq!(config.num_ships, 10);
        assert_eq!(config.num_missiles, 2);
        assert_eq!(config.time_step, 0.5);
        // hard asks for sky 4 but ten ships force it up to 9
        assert_eq!(config.sky_height, 9);
    }

    #[test]
    fn sky_clamps_to_keep_wins_reachable() {
        let config = GameConfig::resolve(&args(Difficulty::Custom, 5, 0, 6, 1.0), 50).unwrap();
        assert_eq!(config.sky_height, 6);
    }

    #[test]
    fn rejects_out_of_range_fleet() {
        assert!(matches!(
            GameConfig::resolve(&args(Difficulty::Custom, 1, 4, 2, 1.0), 50),
            Err(ConfigError::ShipCount(1))
        ));
        assert!(matches!(
            GameConfig::resolve(&args(Difficulty::Custom, 11, 4, 2, 1.0), 50),
            Err(ConfigError::ShipCount(11))
        ));
    }

    #[test]
    fn rejects_zero_missiles_and_speed() {
        assert!(matches!(
            GameConfig::resolve(&args(Difficulty::Custom, 5, 4, 0, 1.0), 50),
            Err(ConfigError::MissileCount(0))
        ));
        assert!(matches!(
            GameConfig::resolve(&args(Difficulty::Custom, 5, 4, 2, 0.0), 50),
            Err(ConfigError::Speed(_))
        ));
    }

    #[test]
    fn rejects_sky_taller_than_terminal() {
        // clamped sky is 8; 8 + chrome does not fit 20 rows
        let err = GameConfig::resolve(&args(Difficulty::Custom, 5, 8, 2, 1.0), 20);
        assert!(matches!(err, Err(ConfigError::SkyHeight { sky: 8, .. })));
    }

    #[test]
    fn ship_lifetime_is_half_the_fleet_firepower() {
        let config = GameConfig::resolve(&args(Difficulty::Custom, 5, 4, 2, 1.0), 50).unwrap();
        assert_eq!(config.ship_lifetime(), 5);
        let config = GameConfig::resolve(&args(Difficulty::Custom, 3, 4, 1, 1.0), 50).unwrap();
        assert_eq!(config.ship_lifetime(), 1);
    }
}
