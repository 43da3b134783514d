use serde::{Deserialize, Serialize};

use super::stats::SearchStats;
use super::SearchStrategy;
use crate::core::{GameState, Turn, Value};

/// A chosen successor, the value that justified it, and the counters
/// accumulated across every per-successor search.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Decision<S> {
    pub state: S,
    pub value: Value,
    pub stats: SearchStats,
}

/// Picks the best immediate successor of `state` for the side `turn`.
///
/// Each successor gets its own full search: the opponent to move, one ply
/// later, one ply less budget. Ties keep the earliest successor in
/// generation order. Returns `None` when there is nothing to choose from.
pub fn decide<S, T>(
    strategy: &T,
    state: &S,
    turn: Turn,
    ply: usize,
    depth: usize,
) -> Option<Decision<S>>
where
    S: GameState,
    T: SearchStrategy<S> + ?Sized,
{
    let successors = state.successors(turn);
    if successors.is_empty() {
        return None;
    }

    let mut stats = SearchStats::new();
    let mut best: Option<(S, Value)> = None;
    let child_depth = depth.saturating_sub(1);

    for succ in successors {
        let report = strategy.search(&succ, turn.opponent(), ply + 1, child_depth);
        stats.merge(report.stats);

        let improves = match &best {
            None => true,
            Some((_, value)) => match turn {
                Turn::Maximizer => report.value > *value,
                Turn::Minimizer => report.value < *value,
            },
        };
        if improves {
            best = Some((succ, report.value));
        }
    }

    best.map(|(state, value)| Decision {
        state,
        value,
        stats,
    })
}
