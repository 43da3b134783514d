use std::hash::Hash;

use super::types::Turn;

/// An immutable snapshot of a game position.
///
/// Implementations expose the two things the search engines need: successor
/// generation and a canonical encoding used as the transposition-table key.
/// Both must be deterministic. A move never mutates a position; it produces
/// a fresh one, and the engine discards it once its subtree is explored.
pub trait GameState: Sized {
    /// Canonical encoding of a position. Two states that encode equally are
    /// the same position as far as the transposition table is concerned, so
    /// the encoding should be total and collision-free in practice.
    type Key: Eq + Hash;

    /// Every position reachable in one move by `turn`, in a deterministic
    /// order. An empty vector means `turn` has no legal move.
    fn successors(&self, turn: Turn) -> Vec<Self>;

    /// The canonical encoding of this position.
    fn encode(&self) -> Self::Key;
}
