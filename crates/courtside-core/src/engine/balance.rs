use crate::core::models::player::Player;
use crate::core::models::position::Position;
use crate::core::models::team::slot_counts;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BalanceStrategy {
    /// Plans every move against the roster as it was before balancing and
    /// only takes players from slots that keep at least one occupant.
    /// Fills all five slots whenever there are at least five players.
    #[default]
    Snapshot,
    /// Walks the slots in order and moves players as it goes, possibly
    /// moving the same player twice or emptying a slot it already visited.
    Sequential,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reassignment {
    /// Index into the sorted roster.
    pub player_index: usize,
    pub player: String,
    pub from: Position,
    pub to: Position,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BalanceReport {
    pub strategy: BalanceStrategy,
    pub initial_counts: [usize; 5],
    pub final_counts: [usize; 5],
    pub reassignments: Vec<Reassignment>,
}

impl BalanceReport {
    pub fn all_slots_filled(&self) -> bool {
        self.final_counts.iter().all(|&count| count > 0)
    }
}

/// Sorts `players` by slot (stable) and reassigns players until every slot
/// is represented, closest slot first and earliest player on ties.
///
/// Players are never added or removed; only positions change.
pub fn balance(players: &mut [Player], strategy: BalanceStrategy) -> BalanceReport {
    players.sort_by_key(Player::position);
    let initial_counts = slot_counts(players);
    debug!(counts = ?initial_counts, "Slot counts before balancing.");

    let reassignments = match strategy {
        BalanceStrategy::Snapshot => balance_snapshot(players, initial_counts),
        BalanceStrategy::Sequential => balance_sequential(players, initial_counts),
    };

    for moved in &reassignments {
        info!(
            player = %moved.player,
            from = %moved.from,
            to = %moved.to,
            "Reassigned player to fill an empty slot."
        );
    }

    let report = BalanceReport {
        strategy,
        initial_counts,
        final_counts: slot_counts(players),
        reassignments,
    };
    if !report.all_slots_filled() {
        warn!(counts = ?report.final_counts, ?strategy, "Roster still has empty slots after balancing.");
    }
    report
}

fn balance_snapshot(players: &mut [Player], counts: [usize; 5]) -> Vec<Reassignment> {
    let snapshot: Vec<Position> = players.iter().map(Player::position).collect();
    let mut planned = counts;
    let mut chosen = vec![false; snapshot.len()];
    let mut plan = Vec::new();

    for target in Position::ALL {
        if counts[target.index()] > 0 {
            continue;
        }
        let candidate = snapshot
            .iter()
            .enumerate()
            .filter(|&(i, from)| !chosen[i] && planned[from.index()] > 1)
            .min_by_key(|&(i, from)| (from.distance(target), i));

        match candidate {
            Some((i, &from)) => {
                chosen[i] = true;
                planned[from.index()] -= 1;
                planned[target.index()] += 1;
                plan.push((i, from, target));
            }
            None => debug!(slot = %target, "No spare player to move into empty slot."),
        }
    }

    plan.into_iter()
        .map(|(i, from, to)| {
            players[i].reassign(to);
            Reassignment {
                player_index: i,
                player: players[i].name.clone(),
                from,
                to,
            }
        })
        .collect()
}

fn balance_sequential(players: &mut [Player], mut counts: [usize; 5]) -> Vec<Reassignment> {
    let mut moves = Vec::new();

    for target in Position::ALL {
        if counts[target.index()] > 0 || players.is_empty() {
            continue;
        }
        // The donor's count is deliberately left untouched.
        let candidate = players
            .iter()
            .enumerate()
            .min_by_key(|&(i, player)| (player.position().distance(target), i))
            .map(|(i, _)| i);

        if let Some(i) = candidate {
            let from = players[i].position();
            players[i].reassign(target);
            counts[target.index()] += 1;
            moves.push(Reassignment {
                player_index: i,
                player: players[i].name.clone(),
                from,
                to: target,
            });
        }
    }
    moves
}
