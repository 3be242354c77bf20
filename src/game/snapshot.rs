use crate::config::GameConfig;
use crate::game::round::{ActiveEnemy, ActiveShip, Projectile, RoundState, SlotStatus};
use crate::game::stats::RoundStats;

/// A staged mid-round world shown on the overview screen before the
/// first round, so the player sees every board element at one glance.
#[derive(Clone, Debug)]
pub struct Snapshot {
    pub round: RoundState,
    pub stats: RoundStats,
    pub next_action: String,
    pub feedback: &'static str,
}

/// Builds the demo board: an alien a third of the way down the
/// rightmost lane, a missile climbing toward it when the sky has room,
/// a ship whose remaining lifetime matches the moves it would have
/// made, and spent slots once the fleet is big enough to spare them.
pub fn demo_board(config: GameConfig) -> Snapshot {
    let n = config.num_ships;
    let sky = config.sky_height;
    let missiles = config.num_missiles;
    let enemy_lane = n - 1;
    let next_lane = (n / 2).saturating_sub(1);
    let budget = config.ship_lifetime();

    let mut round = RoundState::idle(config);
    round.queue = vec![next_lane];
    round.enemy = Some(ActiveEnemy { lane: enemy_lane, altitude: sky / 3 });
    if sky > 1 {
        round.shots.push(Projectile { lane: enemy_lane, altitude: 2 * sky / 3 });
    }

    let mut feedback = "";
    if sky <= 1 {
        // no room for a shot in flight; show a fresh ship instead
        round.slots[enemy_lane] = SlotStatus::Active;
        round.ship = Some(ActiveShip { pos: enemy_lane, base: enemy_lane, lifetime: 1, shots: 1 });
        feedback = "ship activated";
    } else if missiles <= 1 {
        // the demo ship spent its only missile on the shot in flight
        round.slots[enemy_lane] = SlotStatus::Wracked;
        if let Some(shot) = round.shots.first_mut() {
            shot.altitude = sky - 1;
        }
        feedback = "ship wracked";
    } else {
        // base near the enemy, position pulled left as far as the shot
        // in flight plausibly allows, lifetime net of those moves
        let shot_altitude = 2 * sky / 3;
        let near_base = n - 2;
        let reachable =
            budget as usize > (enemy_lane - near_base) + (enemy_lane - next_lane);
        let base = if reachable { near_base } else { enemy_lane };
        let pos = 1.max(n.saturating_sub(3.min(sky - shot_altitude)));
        let spent = ((enemy_lane - base) + enemy_lane.saturating_sub(pos)) as u32;
        round.slots[base] = SlotStatus::Active;
        round.ship = Some(ActiveShip {
            pos,
            base,
            lifetime: budget.saturating_sub(spent),
            shots: missiles as u32 - 1,
        });
    }

    let mut stats = RoundStats::default();
    if n > 3 {
        stats.destroyed = missiles as u32;
        round.slots[next_lane] = SlotStatus::Wracked;
    }
    if n > 6 {
        stats.destroyed = missiles as u32 * 2;
        round.slots[1] = SlotStatus::Wracked;
        round.slots[next_lane] = SlotStatus::Wracked;
    }

    let next_action = suggest_action(&round);

    Snapshot { round, stats, next_action, feedback }
}

fn suggest_action(round: &RoundState) -> String {
    let Some(ship) = round.ship else {
        // suggest the free slot nearest the next alien, scanning left
        let n = round.config.num_ships;
        let mut lane = round.next_spawn_lane().unwrap_or(0);
        while round.slots[lane] != SlotStatus::Inactive {
            lane = lane.checked_sub(1).unwrap_or(n - 1);
        }
        return format!("start ship {}", lane + 1);
    };
    let enemy_lane = round.enemy.map(|enemy| enemy.lane);
    let shot_lane = round.shots.first().map(|shot| shot.lane);
    if round.config.sky_height > 1
        && (enemy_lane != Some(ship.pos) || shot_lane == Some(ship.pos))
    {
        String::from("move left")
    } else {
        String::from("shoot")
    }
}
