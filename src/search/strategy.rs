use super::stats::SearchReport;
use crate::core::{GameState, Turn};

/// 探索戦略のtrait
///
/// One engine behind one method: evaluate `state` with `turn` to move at
/// `ply`, spending at most `depth` plies of lookahead. Strategies that share
/// an evaluator agree on the value; they differ in how much work the report
/// shows.
pub trait SearchStrategy<S: GameState> {
    fn search(&self, state: &S, turn: Turn, ply: usize, depth: usize) -> SearchReport;
    fn name(&self) -> &str;
}
