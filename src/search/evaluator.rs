//! Evaluator trait for position evaluation
//!
//! Defines the interface both search engines consume: terminal detection
//! plus a heuristic score for everything still in play.

use crate::core::Value;

/// Trait for scoring game positions from the maximizer's perspective.
pub trait PositionEvaluator<S> {
    /// Terminal utility of `state` at turn number `ply`.
    ///
    /// Returns:
    ///   - `Some(value)`: the game is over and `value` is its exact utility.
    ///     This is the only place the reserved bounds may come from.
    ///   - `None`: the game is still in progress.
    fn utility(&self, state: &S, ply: usize) -> Option<Value>;

    /// Heuristic estimate of a non-terminal position.
    ///
    /// Must stay strictly inside the reserved bounds; the engines abort on
    /// a heuristic that claims an infinite value.
    fn heuristic(&self, state: &S) -> Value;
}
