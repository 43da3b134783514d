//! # adversarial-search
//!
//! Depth-limited two-player search over any game that can enumerate its
//! successor positions. Two engines sit behind the [`SearchStrategy`]
//! trait: plain [`Minimax`] and pruning [`AlphaBeta`]. Both report the
//! same value for the same inputs; the [`SearchStats`] they return show
//! how much work each one did. An optional per-call transposition table
//! collapses repeated positions without changing any result.
//!
//! A game plugs in through two traits: [`GameState`] for successor
//! generation and [`PositionEvaluator`] for scoring.
//!
//! ```
//! use adversarial_search::{
//!     AlphaBeta, GameState, PositionEvaluator, SearchStrategy, Turn, Value,
//! };
//!
//! // Take 1 or 2 tokens per move; whoever takes the last token wins.
//! #[derive(Clone, Copy)]
//! struct Pile {
//!     tokens: u32,
//!     to_move: Turn,
//! }
//!
//! impl GameState for Pile {
//!     type Key = (u32, Turn);
//!
//!     fn successors(&self, turn: Turn) -> Vec<Pile> {
//!         (1..=self.tokens.min(2))
//!             .map(|take| Pile {
//!                 tokens: self.tokens - take,
//!                 to_move: turn.opponent(),
//!             })
//!             .collect()
//!     }
//!
//!     fn encode(&self) -> (u32, Turn) {
//!         (self.tokens, self.to_move)
//!     }
//! }
//!
//! struct LastTakeWins;
//!
//! impl PositionEvaluator<Pile> for LastTakeWins {
//!     fn utility(&self, state: &Pile, _ply: usize) -> Option<Value> {
//!         if state.tokens > 0 {
//!             return None;
//!         }
//!         // The previous move took the last token; the side to move lost.
//!         Some(match state.to_move {
//!             Turn::Maximizer => Value::MinusInfinity,
//!             Turn::Minimizer => Value::PlusInfinity,
//!         })
//!     }
//!
//!     fn heuristic(&self, _state: &Pile) -> Value {
//!         Value::DRAW
//!     }
//! }
//!
//! let start = Pile {
//!     tokens: 7,
//!     to_move: Turn::Maximizer,
//! };
//! let engine = AlphaBeta::new(LastTakeWins);
//! let report = engine.search(&start, Turn::Maximizer, 0, 8);
//! assert_eq!(report.value, Value::PlusInfinity);
//! ```

pub mod core;
pub mod search;


pub use crate::core::{GameState, Turn, Value};
pub use crate::search::{
    decide, AlphaBeta, Decision, Minimax, PositionEvaluator, SearchConfig, SearchReport,
    SearchStats, SearchStrategy, TableEntry, TranspositionTable,
};
