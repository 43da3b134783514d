use super::config::SearchConfig;
use super::evaluator::PositionEvaluator;
use super::stats::{SearchReport, SearchStats};
use super::tt::TranspositionTable;
use super::SearchStrategy;
use crate::core::{GameState, Turn, Value};

/// Plain exhaustive minimax. Visits every node of the depth-limited tree,
/// which makes it the reference the pruning engine is checked against.
pub struct Minimax<E> {
    evaluator: E,
    use_table: bool,
    table_capacity: usize,
}

impl<E> Minimax<E> {
    pub fn new(evaluator: E) -> Self {
        Self::with_table(evaluator, SearchConfig::get().use_table)
    }

    /// Same engine with caching forced on or off.
    pub fn with_table(evaluator: E, use_table: bool) -> Self {
        Self {
            evaluator,
            use_table,
            table_capacity: SearchConfig::get().table_capacity,
        }
    }

    fn evaluate_node<S>(
        &self,
        state: &S,
        turn: Turn,
        ply: usize,
        depth: usize,
        table: &mut TranspositionTable<S::Key>,
        stats: &mut SearchStats,
    ) -> Value
    where
        S: GameState,
        E: PositionEvaluator<S>,
    {
        stats.nodes += 1;

        let key = state.encode();
        if self.use_table {
            if let Some(entry) = table.probe(&key, depth) {
                assert!(entry.depth >= depth); // Sanity check
                stats.table_hits += 1;
                return entry.value;
            }
        }

        let value = if let Some(utility) = self.evaluator.utility(state, ply) {
            utility
        } else if depth == 0 {
            let score = self.evaluator.heuristic(state);
            assert!(score.is_finite(), "heuristic returned a reserved bound");
            score
        } else {
            let successors = state.successors(turn);
            if successors.is_empty() {
                // 合法手なし＝引き分け (no move left is a draw, not a loss)
                Value::DRAW
            } else if turn == Turn::Maximizer {
                let mut best = Value::MinusInfinity;
                for succ in &successors {
                    let child =
                        self.evaluate_node(succ, turn.opponent(), ply + 1, depth - 1, table, stats);
                    best = best.max(child);
                }
                best
            } else {
                let mut best = Value::PlusInfinity;
                for succ in &successors {
                    let child =
                        self.evaluate_node(succ, turn.opponent(), ply + 1, depth - 1, table, stats);
                    best = best.min(child);
                }
                best
            }
        };

        if self.use_table {
            table.store(key, value, depth);
        }
        value
    }
}

impl<S, E> SearchStrategy<S> for Minimax<E>
where
    S: GameState,
    E: PositionEvaluator<S>,
{
    fn search(&self, state: &S, turn: Turn, ply: usize, depth: usize) -> SearchReport {
        // A fresh table and zeroed counters for every top-level call.
        let mut table = TranspositionTable::new(self.table_capacity);
        let mut stats = SearchStats::new();

        let value = self.evaluate_node(state, turn, ply, depth, &mut table, &mut stats);

        stats.table_size = table.len();
        assert!(stats.table_size as u64 <= stats.nodes); // Sanity check
        SearchReport { value, stats }
    }

    fn name(&self) -> &str {
        "minimax"
    }
}
